//! 路由处理函数

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::error::ApiError;
use super::state::AppState;
use crate::analysis::{factor_names, AnalysisRequest, AnalysisResult};
use crate::services::constants::messages;

/// POST - 产品分析
///
/// 先检查 API Key，再解析请求体，所以缺少 Key 时无论请求体如何都返回 500
pub async fn analyze_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    let api_key = state.credentials.resolve().ok_or_else(|| {
        error!("provider API key is not configured");
        ApiError::missing_api_key()
    })?;

    let request = parse_request(&body)?;
    let result = state.analysis.analyze(&api_key, &request).await?;
    Ok(Json(result))
}

/// 请求体必须是 JSON 对象；数组等其他形式一律按无效请求体处理
fn parse_request(body: &[u8]) -> Result<AnalysisRequest, ApiError> {
    let invalid = |details: String| {
        info!(details = %details, "rejected request body");
        ApiError::bad_request(messages::INVALID_BODY, Some(details))
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid("request body must be a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}

/// OPTIONS - CORS 预检，头部由路由层统一添加
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub message: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub candidates: Vec<String>,
    pub first_attempt_timeout_ms: u64,
    pub factors: Vec<&'static str>,
    pub api_key_configured: bool,
}

/// GET - 运行状态，不包含 Key 本身
pub async fn diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    Json(Diagnostics {
        message: messages::DIAGNOSTICS,
        version: env!("CARGO_PKG_VERSION"),
        provider: state.config.provider.base_url.clone(),
        candidates: state.config.fallback.candidates.clone(),
        first_attempt_timeout_ms: state.config.fallback.first_attempt_timeout_ms,
        factors: factor_names().collect(),
        api_key_configured: state.credentials.resolve().is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_body_is_rejected() {
        let err = parse_request(br#"["Desk lamp"]"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, messages::INVALID_BODY);
    }

    #[test]
    fn object_body_is_decoded() {
        let request = parse_request(br#"{"productName":"Desk lamp","targetMarket":"DE"}"#).unwrap();
        assert_eq!(request.product_name.as_deref(), Some("Desk lamp"));
        assert_eq!(request.target_market.as_deref(), Some("DE"));
    }
}
