use lottawords_core::{
    classify_response, FetchOutcome, LoadPolicy, LoadState, LoadStep, PuzzleResponse,
    LOADING_MESSAGE, MAX_ATTEMPTS, RETRY_DELAY_MS,
};

const VALID_BODY: &str = r#"{
    "square": { "top": "ABC", "right": "DEF", "bottom": "GHI", "left": "JKL" },
    "nyt_solution": ["ADG", "GJB"],
    "lotta_solution": ["BEH", "HKC"],
    "error": null
}"#;

fn parse(body: &str) -> PuzzleResponse {
    serde_json::from_str(body).expect("response parses")
}

fn valid_outcome() -> FetchOutcome {
    classify_response(parse(VALID_BODY))
}

fn drive(outcomes: Vec<FetchOutcome>) -> (LoadState, u32) {
    let policy = LoadPolicy::default();
    let mut state = LoadState::start();
    let mut requests = 1u32;
    for outcome in outcomes {
        let (next, step) = state.apply(outcome, &policy);
        state = next;
        match step {
            LoadStep::Retry { .. } => requests += 1,
            LoadStep::Settle => break,
        }
    }
    (state, requests)
}

#[test]
fn classifies_valid_payload() {
    let FetchOutcome::Valid(data) = valid_outcome() else {
        panic!("expected valid outcome");
    };
    assert_eq!(data.square.side(lottawords_core::Side::Top), "ABC");
    assert_eq!(data.nyt_solution, vec!["ADG", "GJB"]);
    assert_eq!(data.lotta_solution, vec!["BEH", "HKC"]);
}

#[test]
fn classifies_incomplete_payloads_as_not_ready() {
    let bodies = [
        "{}",
        r#"{ "error": "scrape failed" }"#,
        r#"{ "status": "loading" }"#,
        r#"{ "square": { "right": "DEF", "bottom": "GHI", "left": "JKL" },
             "nyt_solution": [], "lotta_solution": [], "error": null }"#,
        r#"{ "square": { "top": "ABC", "right": "DEF", "bottom": "GHI", "left": "JKL" },
             "lotta_solution": [], "error": null }"#,
        r#"{ "square": { "top": "ABC", "right": "DEF", "bottom": "GHI", "left": "JKL" },
             "nyt_solution": [], "error": null }"#,
    ];
    for body in bodies {
        assert_eq!(
            classify_response(parse(body)),
            FetchOutcome::NotReady,
            "body should be not ready: {body}"
        );
    }
}

#[test]
fn error_field_outranks_complete_payload() {
    let body = r#"{
        "square": { "top": "ABC", "right": "DEF", "bottom": "GHI", "left": "JKL" },
        "nyt_solution": ["ADG"], "lotta_solution": ["BEH"],
        "error": "solver crashed"
    }"#;
    assert_eq!(classify_response(parse(body)), FetchOutcome::NotReady);
}

#[test]
fn starts_loading_with_zero_attempts() {
    let LoadState::Loading { attempt, message } = LoadState::start() else {
        panic!("expected loading state");
    };
    assert_eq!(attempt, 0);
    assert_eq!(message, LOADING_MESSAGE);
}

#[test]
fn retry_message_counts_attempts() {
    let policy = LoadPolicy::default();
    let (state, step) = LoadState::start().apply(FetchOutcome::NotReady, &policy);
    assert_eq!(
        step,
        LoadStep::Retry {
            delay_ms: RETRY_DELAY_MS
        }
    );
    let LoadState::Loading { attempt, message } = state else {
        panic!("expected loading state");
    };
    assert_eq!(attempt, 1);
    assert_eq!(message, "Loading puzzle... (Attempt 1/20)");
}

#[test]
fn recovers_after_three_not_ready_attempts() {
    let mut outcomes = vec![FetchOutcome::NotReady; 3];
    outcomes.push(valid_outcome());
    let (state, requests) = drive(outcomes);
    assert!(matches!(state, LoadState::Ready(_)));
    assert_eq!(requests, 4);
    assert!(requests <= MAX_ATTEMPTS);
}

#[test]
fn transport_failures_share_the_retry_path() {
    let outcomes = vec![
        FetchOutcome::TransportFailed,
        FetchOutcome::NotReady,
        valid_outcome(),
    ];
    let (state, requests) = drive(outcomes);
    assert!(matches!(state, LoadState::Ready(_)));
    assert_eq!(requests, 3);
}

#[test]
fn exhausting_the_budget_fails_without_another_request() {
    let (state, requests) = drive(vec![FetchOutcome::NotReady; MAX_ATTEMPTS as usize]);
    let LoadState::Failed { reason } = &state else {
        panic!("expected failed state");
    };
    assert!(reason.starts_with("Timed out"));
    assert_eq!(requests, MAX_ATTEMPTS);

    let policy = LoadPolicy::default();
    let (after, step) = state.apply(FetchOutcome::NotReady, &policy);
    assert_eq!(after, state);
    assert_eq!(step, LoadStep::Settle);
}

#[test]
fn ready_state_is_terminal() {
    let policy = LoadPolicy::default();
    let (ready, _) = LoadState::start().apply(valid_outcome(), &policy);
    assert!(matches!(ready, LoadState::Ready(_)));
    let (after, step) = ready.apply(FetchOutcome::NotReady, &policy);
    assert_eq!(after, ready);
    assert_eq!(step, LoadStep::Settle);
}

#[test]
fn manual_restart_resets_the_machine() {
    let (failed, _) = drive(vec![FetchOutcome::NotReady; MAX_ATTEMPTS as usize]);
    assert!(matches!(failed, LoadState::Failed { .. }));
    let LoadState::Loading { attempt, .. } = LoadState::start() else {
        panic!("expected loading state");
    };
    assert_eq!(attempt, 0);
}

#[test]
fn smaller_budgets_are_honored() {
    let policy = LoadPolicy {
        retry_delay_ms: 10,
        max_attempts: 2,
    };
    let mut state = LoadState::start();
    let (next, step) = state.apply(FetchOutcome::NotReady, &policy);
    assert_eq!(step, LoadStep::Retry { delay_ms: 10 });
    state = next;
    let (next, step) = state.apply(FetchOutcome::NotReady, &policy);
    assert_eq!(step, LoadStep::Settle);
    assert!(matches!(next, LoadState::Failed { .. }));
}
