use std::sync::Arc;

use super::client::DynLlmClient;
use super::http::GeminiClient;
use crate::error::Result;

/// LLM 客户端工厂
///
/// API Key 按请求读取，所以客户端也按请求创建；底层连接池由工厂持有并复用
pub trait LlmClientFactory: Send + Sync {
    fn create_client(&self, api_key: &str) -> Result<DynLlmClient>;
}

pub struct GeminiClientFactory {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClientFactory {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: GeminiClient::create_http_client()?,
            base_url: base_url.into(),
        })
    }
}

impl LlmClientFactory for GeminiClientFactory {
    fn create_client(&self, api_key: &str) -> Result<DynLlmClient> {
        Ok(Arc::new(GeminiClient::with_http_client(
            self.http.clone(),
            self.base_url.clone(),
            api_key,
        )))
    }
}

/// 忽略 Key，总是返回同一个客户端
pub struct FixedClientFactory {
    client: DynLlmClient,
}

impl FixedClientFactory {
    pub fn new(client: DynLlmClient) -> Self {
        Self { client }
    }
}

impl LlmClientFactory for FixedClientFactory {
    fn create_client(&self, _api_key: &str) -> Result<DynLlmClient> {
        Ok(Arc::clone(&self.client))
    }
}
