use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Status lines shown while a playground answer is "computed".
pub const PROCESSING_STAGES: [&str; 5] = [
    "Tokenizing input...",
    "Loading embeddings...",
    "Running inference...",
    "Computing attention weights...",
    "Generating response...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    Cancelled,
}

/// Cosmetic delay sequence. Has no effect on the answer itself.
#[derive(Debug, Clone)]
pub struct StageSequence {
    stages: &'static [&'static str],
    delay: Duration,
}

impl StageSequence {
    pub fn new(delay: Duration) -> Self {
        Self {
            stages: &PROCESSING_STAGES,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn stages(&self) -> &'static [&'static str] {
        self.stages
    }

    /// 依序顯示每個階段，取消時立即返回
    pub async fn run<F>(&self, token: &CancellationToken, mut on_stage: F) -> StageOutcome
    where
        F: FnMut(&str),
    {
        for stage in self.stages {
            if token.is_cancelled() {
                return StageOutcome::Cancelled;
            }
            on_stage(stage);
            if self.hold(token).await == StageOutcome::Cancelled {
                return StageOutcome::Cancelled;
            }
        }
        StageOutcome::Completed
    }

    /// Waits a single stage interval.
    pub async fn hold(&self, token: &CancellationToken) -> StageOutcome {
        tokio::select! {
            _ = token.cancelled() => StageOutcome::Cancelled,
            _ = tokio::time::sleep(self.delay) => StageOutcome::Completed,
        }
    }
}
