use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("model `{model}` failed: {reason}")]
    Upstream { model: String, reason: String },
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
    #[error("all {attempts} candidate model(s) failed; last error: {last}")]
    Exhausted {
        attempts: usize,
        last: Box<AnalysisError>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnalysisError {
    pub fn upstream(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Upstream {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// 链耗尽时返回给调用方的诊断细节：只暴露最后一次失败
    pub fn detail(&self) -> String {
        match self {
            AnalysisError::Exhausted { last, .. } => last.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_detail_is_last_error() {
        let err = AnalysisError::Exhausted {
            attempts: 2,
            last: Box::new(AnalysisError::upstream("flash", "quota exceeded")),
        };
        assert_eq!(err.detail(), "model `flash` failed: quota exceeded");
    }
}
