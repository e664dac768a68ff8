use crate::square::PuzzleData;

pub const RETRY_DELAY_MS: u32 = 2_000;
pub const MAX_ATTEMPTS: u32 = 20;
pub const LOADING_MESSAGE: &str = "Loading puzzle...";
pub const TIMEOUT_MESSAGE: &str = "Timed out waiting for data. Please refresh the page.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadPolicy {
    pub retry_delay_ms: u32,
    pub max_attempts: u32,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            retry_delay_ms: RETRY_DELAY_MS,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading { attempt: u32, message: String },
    Ready(PuzzleData),
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Valid(PuzzleData),
    NotReady,
    TransportFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStep {
    Retry { delay_ms: u32 },
    Settle,
}

impl LoadState {
    pub fn start() -> Self {
        LoadState::Loading {
            attempt: 0,
            message: LOADING_MESSAGE.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn apply(&self, outcome: FetchOutcome, policy: &LoadPolicy) -> (LoadState, LoadStep) {
        let LoadState::Loading { attempt, .. } = self else {
            return (self.clone(), LoadStep::Settle);
        };
        match outcome {
            FetchOutcome::Valid(data) => (LoadState::Ready(data), LoadStep::Settle),
            FetchOutcome::NotReady | FetchOutcome::TransportFailed => {
                let attempt = attempt + 1;
                if attempt >= policy.max_attempts {
                    let failed = LoadState::Failed {
                        reason: TIMEOUT_MESSAGE.to_string(),
                    };
                    return (failed, LoadStep::Settle);
                }
                let message = format!(
                    "{LOADING_MESSAGE} (Attempt {attempt}/{max})",
                    max = policy.max_attempts
                );
                let loading = LoadState::Loading { attempt, message };
                (loading, LoadStep::Retry {
                    delay_ms: policy.retry_delay_ms,
                })
            }
        }
    }
}
