use std::sync::Arc;

use async_trait::async_trait;

use super::types::{LlmRequest, LlmResponse};
use crate::error::Result;

/// 生成式模型提供方的最小抽象：一次请求，一段文本
///
/// 实现方不做重试；失败统一返回 `AnalysisError::Upstream`
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse>;

    /// 提供方名称，用于日志和诊断接口
    fn provider(&self) -> &str;
}

pub type DynLlmClient = Arc<dyn LlmClient>;
