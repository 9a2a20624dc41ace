//! 应用状态

use std::sync::Arc;

use crate::config::{CredentialSource, ServiceConfig};
use crate::error::Result;
use crate::llm::{GeminiClientFactory, LlmClientFactory};
use crate::services::AnalysisService;

/// 各处理函数共享的状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub credentials: CredentialSource,
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    /// 使用 Gemini 客户端；API Key 每次请求时从配置的环境变量读取
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let factory = GeminiClientFactory::new(config.provider.base_url.clone())?;
        let credentials = CredentialSource::from_env(config.provider.api_key_env.clone());
        Ok(Self::with_parts(config, credentials, Arc::new(factory)))
    }

    pub fn with_parts(
        config: ServiceConfig,
        credentials: CredentialSource,
        clients: Arc<dyn LlmClientFactory>,
    ) -> Self {
        let analysis = AnalysisService::from_config(clients, &config);
        Self {
            config: Arc::new(config),
            credentials,
            analysis: Arc::new(analysis),
        }
    }
}
