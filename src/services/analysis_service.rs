use std::sync::Arc;

use tracing::{debug, info};

use super::fallback::{FallbackOrchestrator, FallbackPolicy, FallbackRun};
use super::model_invoker::ModelInvoker;
use super::prompt_builder::PromptBuilder;
use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::llm::LlmClientFactory;

/// 请求编排：校验 -> 构建 prompt -> 回退链
///
/// HTTP 接口和命令行共用
pub struct AnalysisService {
    clients: Arc<dyn LlmClientFactory>,
    policy: FallbackPolicy,
    temperature: f32,
}

impl AnalysisService {
    pub fn new(clients: Arc<dyn LlmClientFactory>, policy: FallbackPolicy) -> Self {
        Self {
            clients,
            policy,
            temperature: crate::llm::types::default_temperature(),
        }
    }

    pub fn from_config(clients: Arc<dyn LlmClientFactory>, config: &ServiceConfig) -> Self {
        Self::new(clients, config.fallback_policy()).with_temperature(config.provider.temperature)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// 校验失败时不会发起任何上游调用
    pub async fn analyze(&self, api_key: &str, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.run(api_key, request).await?.into_result()
    }

    /// 与 `analyze` 相同，但保留全部尝试记录
    pub async fn run(&self, api_key: &str, request: &AnalysisRequest) -> Result<FallbackRun> {
        let normalized = request.normalize()?;
        let prompt = PromptBuilder::build(&normalized);
        debug!(prompt_len = prompt.len(), "prompt built");

        let client = self.clients.create_client(api_key)?;
        let invoker = ModelInvoker::new(client).with_temperature(self.temperature);
        info!(
            product = %normalized.product_name,
            market = %normalized.target_market,
            provider = invoker.provider(),
            "starting product analysis"
        );

        let orchestrator = FallbackOrchestrator::new(invoker, self.policy.clone());
        let run = orchestrator.run(&prompt).await;
        info!(
            attempts = run.attempts.len(),
            failures = run.failures().count(),
            model = run.succeeded_model().unwrap_or("none"),
            "product analysis finished"
        );
        Ok(run)
    }
}
