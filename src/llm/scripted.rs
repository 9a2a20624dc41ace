use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::client::LlmClient;
use super::types::{LlmRequest, LlmResponse};
use crate::error::{AnalysisError, Result};

/// 预设的单次回复
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Text(String),
    Fail(String),
    /// 等待指定时长后返回文本
    Delayed(Duration, String),
    /// 永不返回
    Hang,
}

/// 按模型名回放预设回复的本地客户端，不发起网络请求
#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies: HashMap<String, ScriptedReply>,
    calls: Arc<Mutex<Vec<String>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, model: impl Into<String>, reply: ScriptedReply) -> Self {
        self.replies.insert(model.into(), reply);
        self
    }

    pub fn text(self, model: impl Into<String>, text: impl Into<String>) -> Self {
        self.reply(model, ScriptedReply::Text(text.into()))
    }

    pub fn fail(self, model: impl Into<String>, reason: impl Into<String>) -> Self {
        self.reply(model, ScriptedReply::Fail(reason.into()))
    }

    /// 按调用顺序记录的模型名
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// 成功返回文本的调用；被取消或失败的调用不会出现
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        self.calls.lock().push(request.model.clone());

        let reply = self.replies.get(&request.model).cloned().ok_or_else(|| {
            AnalysisError::upstream(&request.model, "no scripted reply for model")
        })?;

        let content = match reply {
            ScriptedReply::Text(text) => text,
            ScriptedReply::Fail(reason) => {
                return Err(AnalysisError::upstream(&request.model, reason))
            }
            ScriptedReply::Delayed(delay, text) => {
                tokio::time::sleep(delay).await;
                text
            }
            ScriptedReply::Hang => std::future::pending::<String>().await,
        };

        self.completed.lock().push(request.model);
        Ok(LlmResponse { content })
    }

    fn provider(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_by_model_and_records_calls() {
        let client = ScriptedClient::new()
            .text("pro", "hello")
            .fail("flash", "quota exceeded");

        let ok = client.complete(LlmRequest::new("pro", "p")).await.unwrap();
        assert_eq!(ok.content, "hello");

        let err = client.complete(LlmRequest::new("flash", "p")).await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));

        let err = client.complete(LlmRequest::new("lite", "p")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Upstream { .. }));

        assert_eq!(client.calls(), vec!["pro", "flash", "lite"]);
        assert_eq!(client.completed(), vec!["pro"]);
    }
}
