use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, info, warn};

use super::model_invoker::ModelInvoker;
use super::response_extractor::ResponseExtractor;
use crate::analysis::AnalysisResult;
use crate::error::{AnalysisError, Result};

pub const DEFAULT_FIRST_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(9000);

/// 回退链配置：候选模型按优先级排列，能力最强的在前
#[derive(Clone, Debug)]
pub struct FallbackPolicy {
    pub candidates: Vec<String>,
    /// 只有第一个候选受此截止时间约束
    pub first_attempt_timeout: Duration,
}

impl FallbackPolicy {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            first_attempt_timeout: DEFAULT_FIRST_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_first_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.first_attempt_timeout = timeout;
        self
    }
}

/// 单次尝试的记录，仅用于驱动回退和日志
#[derive(Clone, Debug)]
pub struct AttemptOutcome {
    pub model: String,
    pub succeeded: bool,
    pub error: Option<String>,
    pub latency: Duration,
}

pub enum AttemptResult {
    Success(AnalysisResult),
    Failure(AnalysisError),
}

#[derive(Debug)]
pub enum ChainState {
    Attempting(usize),
    Succeeded(AnalysisResult),
    Exhausted(AnalysisError),
}

/// 一次回退链执行的终态和全部尝试记录
#[derive(Debug)]
pub struct FallbackRun {
    pub state: ChainState,
    pub attempts: Vec<AttemptOutcome>,
}

impl FallbackRun {
    pub fn failures(&self) -> impl Iterator<Item = &AttemptOutcome> {
        self.attempts.iter().filter(|a| !a.succeeded)
    }

    pub fn succeeded_model(&self) -> Option<&str> {
        self.attempts
            .iter()
            .find(|a| a.succeeded)
            .map(|a| a.model.as_str())
    }

    pub fn into_result(self) -> Result<AnalysisResult> {
        match self.state {
            ChainState::Succeeded(result) => Ok(result),
            ChainState::Exhausted(err) => Err(err),
            ChainState::Attempting(index) => Err(AnalysisError::Other(anyhow::anyhow!(
                "fallback chain stopped at attempt {} without a terminal state",
                index
            ))),
        }
    }
}

/// 回退编排器：按顺序逐个尝试候选模型，返回第一个合法结果
pub struct FallbackOrchestrator {
    invoker: ModelInvoker,
    policy: FallbackPolicy,
}

impl FallbackOrchestrator {
    pub fn new(invoker: ModelInvoker, policy: FallbackPolicy) -> Self {
        Self { invoker, policy }
    }

    pub async fn run(&self, prompt: &str) -> FallbackRun {
        let mut attempts = Vec::with_capacity(self.policy.candidates.len());
        let mut last_error: Option<AnalysisError> = None;
        let mut state = ChainState::Attempting(0);

        loop {
            state = match state {
                ChainState::Attempting(index) => match self.policy.candidates.get(index) {
                    Some(model) => {
                        let (result, outcome) = self.attempt(index, model, prompt).await;
                        attempts.push(outcome);
                        match result {
                            AttemptResult::Success(result) => ChainState::Succeeded(result),
                            AttemptResult::Failure(err) => {
                                last_error = Some(err);
                                ChainState::Attempting(index + 1)
                            }
                        }
                    }
                    None => {
                        let last = last_error.take().unwrap_or_else(|| {
                            AnalysisError::Configuration("no candidate models configured".to_string())
                        });
                        error!(
                            attempts = attempts.len(),
                            last_error = %last,
                            "all candidate models failed"
                        );
                        ChainState::Exhausted(AnalysisError::Exhausted {
                            attempts: attempts.len(),
                            last: Box::new(last),
                        })
                    }
                },
                terminal => return FallbackRun { state: terminal, attempts },
            };
        }
    }

    async fn attempt(&self, index: usize, model: &str, prompt: &str) -> (AttemptResult, AttemptOutcome) {
        let started = Instant::now();
        let deadline = (index == 0).then(|| started + self.policy.first_attempt_timeout);

        info!(
            model,
            attempt = index + 1,
            of = self.policy.candidates.len(),
            deadline_ms = deadline.map(|_| self.policy.first_attempt_timeout.as_millis() as u64),
            "requesting analysis"
        );

        let result = match self.invoker.invoke(model, prompt, deadline).await {
            Ok(raw) => ResponseExtractor::extract(&raw),
            Err(err) => Err(err),
        };
        let latency = started.elapsed();

        match result {
            Ok(result) => {
                info!(model, latency_ms = latency.as_millis() as u64, "analysis succeeded");
                let outcome = AttemptOutcome {
                    model: model.to_string(),
                    succeeded: true,
                    error: None,
                    latency,
                };
                (AttemptResult::Success(result), outcome)
            }
            Err(err) => {
                warn!(
                    model,
                    latency_ms = latency.as_millis() as u64,
                    error = %err,
                    "attempt failed, falling back"
                );
                let outcome = AttemptOutcome {
                    model: model.to_string(),
                    succeeded: false,
                    error: Some(err.to_string()),
                    latency,
                };
                (AttemptResult::Failure(err), outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm::ScriptedClient;

    #[tokio::test]
    async fn empty_chain_is_exhausted_immediately() {
        let invoker = ModelInvoker::new(Arc::new(ScriptedClient::new()));
        let orchestrator = FallbackOrchestrator::new(invoker, FallbackPolicy::new(Vec::<String>::new()));

        let run = orchestrator.run("prompt").await;
        assert!(run.attempts.is_empty());
        assert!(matches!(run.state, ChainState::Exhausted(AnalysisError::Exhausted { attempts: 0, .. })));
    }
}
