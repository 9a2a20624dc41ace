use tokio::time::{timeout_at, Instant};

use crate::error::{AnalysisError, Result};
use crate::llm::{DynLlmClient, LlmRequest};

/// 单次模型调用
///
/// 不做重试。带截止时间调用时，超时即丢弃进行中的请求 future，
/// 底层 HTTP 请求随之中止，迟到的响应不会再被观察到
#[derive(Clone)]
pub struct ModelInvoker {
    client: DynLlmClient,
    temperature: f32,
}

impl ModelInvoker {
    pub fn new(client: DynLlmClient) -> Self {
        Self {
            client,
            temperature: crate::llm::types::default_temperature(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn provider(&self) -> &str {
        self.client.provider()
    }

    pub async fn invoke(&self, model: &str, prompt: &str, deadline: Option<Instant>) -> Result<String> {
        let request = LlmRequest::new(model, prompt).with_temperature(self.temperature);
        let started = Instant::now();

        let outcome = match deadline {
            Some(deadline) => match timeout_at(deadline, self.client.complete(request)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    return Err(AnalysisError::upstream(
                        model,
                        format!("timed out after {} ms", started.elapsed().as_millis()),
                    ))
                }
            },
            None => self.client.complete(request).await,
        };

        let response = outcome.map_err(|e| match e {
            AnalysisError::Upstream { .. } => e,
            other => AnalysisError::upstream(model, other.to_string()),
        })?;

        if response.content.trim().is_empty() {
            return Err(AnalysisError::upstream(model, "empty response text"));
        }

        Ok(response.content)
    }
}
