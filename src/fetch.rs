use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use lottawords_core::{
    classify_response, FetchOutcome, LoadPolicy, LoadState, LoadStep, PuzzleResponse,
};

pub(crate) type LoaderSubscriber = Rc<dyn Fn(LoadState)>;

pub(crate) struct PuzzleLoader {
    inner: Rc<LoaderInner>,
}

struct LoaderInner {
    url: String,
    policy: LoadPolicy,
    state: RefCell<LoadState>,
    retry_timer: RefCell<Option<Timeout>>,
    shut_down: Cell<bool>,
    on_change: LoaderSubscriber,
}

impl PuzzleLoader {
    pub(crate) fn new(url: String, on_change: LoaderSubscriber) -> Self {
        Self {
            inner: Rc::new(LoaderInner {
                url,
                policy: LoadPolicy::default(),
                state: RefCell::new(LoadState::start()),
                retry_timer: RefCell::new(None),
                shut_down: Cell::new(false),
                on_change,
            }),
        }
    }

    pub(crate) fn start(&self) {
        let inner = &self.inner;
        inner.retry_timer.borrow_mut().take();
        *inner.state.borrow_mut() = LoadState::start();
        (inner.on_change)(inner.state.borrow().clone());
        begin_attempt(inner.clone());
    }

    pub(crate) fn shutdown(&self) {
        self.inner.shut_down.set(true);
        self.inner.retry_timer.borrow_mut().take();
    }
}

fn begin_attempt(inner: Rc<LoaderInner>) {
    if inner.shut_down.get() || !inner.state.borrow().is_loading() {
        return;
    }
    spawn_local(async move {
        let outcome = fetch_outcome(&inner.url).await;
        settle_attempt(&inner, outcome);
    });
}

fn settle_attempt(inner: &Rc<LoaderInner>, outcome: FetchOutcome) {
    if inner.shut_down.get() {
        return;
    }
    let (next, step) = inner.state.borrow().apply(outcome, &inner.policy);
    *inner.state.borrow_mut() = next.clone();
    match step {
        LoadStep::Retry { delay_ms } => {
            if let LoadState::Loading { attempt, .. } = &next {
                console::log!(format!("puzzle not ready, retrying (attempt {attempt})"));
            }
            let retry_inner = inner.clone();
            let timer = Timeout::new(delay_ms, move || {
                begin_attempt(retry_inner);
            });
            *inner.retry_timer.borrow_mut() = Some(timer);
        }
        LoadStep::Settle => {
            inner.retry_timer.borrow_mut().take();
        }
    }
    (inner.on_change)(next);
}

async fn fetch_outcome(url: &str) -> FetchOutcome {
    let response = match Request::get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            console::warn!(format!("puzzle fetch failed: {err}"));
            return FetchOutcome::TransportFailed;
        }
    };
    match response.json::<PuzzleResponse>().await {
        Ok(payload) => classify_response(payload),
        Err(err) => {
            console::warn!(format!("puzzle response was not valid JSON: {err}"));
            FetchOutcome::TransportFailed
        }
    }
}
