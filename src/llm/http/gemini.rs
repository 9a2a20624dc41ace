use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::error::{AnalysisError, Result};
use crate::llm::client::LlmClient;
use crate::llm::types::{LlmRequest, LlmResponse};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_PREVIEW: usize = 500;

/// Gemini `generateContent` 客户端
///
/// 一个实例可复用于链上所有模型，模型名随请求传入
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// 连接池复用连接；整体超时只作兜底，首个模型的截止时间由调用方控制
    pub fn create_http_client() -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AnalysisError::Other(anyhow::anyhow!("failed to build HTTP client: {}", e)))
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_GEMINI_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Self::create_http_client()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// 复用已有的连接池，只替换 Key
    pub fn with_http_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    fn request_body(request: &LlmRequest) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "temperature": request.temperature,
                "responseMimeType": "application/json"
            }
        })
    }
}

/// 拼接第一个候选回复的全部文本片段
pub(crate) fn extract_text(payload: &Value) -> Option<String> {
    let parts = payload["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn preview(text: &str) -> String {
    if text.len() <= ERROR_BODY_PREVIEW {
        return text.to_string();
    }
    let mut end = ERROR_BODY_PREVIEW;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated, {} bytes total)", &text[..end], text.len())
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[instrument(skip(self, request), fields(model = %request.model, prompt_len = request.prompt.len()))]
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let model = request.model.as_str();
        let endpoint = self.endpoint_for(model);

        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(&request))
            .send()
            .await
            .map_err(|e| AnalysisError::upstream(model, format!("HTTP request error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AnalysisError::upstream(model, format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AnalysisError::upstream(
                model,
                format!("request failed with status {}: {}", status, preview(&response_text)),
            ));
        }

        let payload: Value = serde_json::from_str(&response_text).map_err(|e| {
            AnalysisError::upstream(
                model,
                format!("response parse error: {}; body: {}", e, preview(&response_text)),
            )
        })?;

        let content = extract_text(&payload).ok_or_else(|| {
            let reason = payload["promptFeedback"]["blockReason"]
                .as_str()
                .map(|r| format!("prompt blocked: {}", r))
                .unwrap_or_else(|| "response contained no text".to_string());
            AnalysisError::upstream(model, reason)
        })?;

        if let Some(usage) = payload.get("usageMetadata") {
            debug!(model, usage = %usage, "token usage");
        }

        Ok(LlmResponse { content })
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}
