use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AnalysisError;
use crate::services::constants::messages;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// 对外错误响应：状态码 + `{ error, details? }`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                details,
            },
        }
    }

    pub fn bad_request(error: impl Into<String>, details: Option<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, details)
    }

    pub fn missing_api_key() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, messages::MISSING_API_KEY, None)
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Validation(message) => Self::bad_request(message, None),
            AnalysisError::Configuration(message) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error.",
                Some(message),
            ),
            err @ AnalysisError::Exhausted { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::ANALYSIS_FAILED,
                Some(err.detail()),
            ),
            err @ (AnalysisError::Upstream { .. } | AnalysisError::MalformedResponse(_)) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::ANALYSIS_FAILED,
                Some(err.to_string()),
            ),
            AnalysisError::Other(err) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.",
                Some(err.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
