use std::collections::HashSet;
use std::net::SocketAddr;

use crate::error::{AnalysisError, Result};

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证 URL 格式
    pub fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(AnalysisError::Configuration("provider base URL must not be empty".into()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AnalysisError::Configuration(format!(
                "provider base URL `{}` must start with http:// or https://",
                url
            )));
        }

        Ok(())
    }

    /// 验证模型名称：不能为空，也不能包含会破坏请求路径的字符
    pub fn validate_model_name(model: &str) -> Result<()> {
        if model.trim().is_empty() {
            return Err(AnalysisError::Configuration("model name must not be empty".into()));
        }

        if model.contains(['/', '?', '#', ' ']) {
            return Err(AnalysisError::Configuration(format!(
                "model name `{}` contains invalid characters",
                model
            )));
        }

        Ok(())
    }

    /// 验证候选模型链：至少一个，且不重复
    pub fn validate_candidates(candidates: &[String]) -> Result<()> {
        if candidates.is_empty() {
            return Err(AnalysisError::Configuration(
                "at least one candidate model is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for model in candidates {
            Self::validate_model_name(model)?;
            if !seen.insert(model.as_str()) {
                return Err(AnalysisError::Configuration(format!(
                    "candidate model `{}` is listed more than once",
                    model
                )));
            }
        }

        Ok(())
    }

    pub fn validate_timeout_ms(timeout_ms: u64) -> Result<()> {
        if timeout_ms == 0 {
            return Err(AnalysisError::Configuration(
                "first attempt timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_bind(bind: &str) -> Result<SocketAddr> {
        bind.parse().map_err(|e| {
            AnalysisError::Configuration(format!("invalid bind address `{}`: {}", bind, e))
        })
    }

    pub fn validate_temperature(temperature: f32) -> Result<()> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AnalysisError::Configuration(format!(
                "temperature {} is outside 0.0..=2.0",
                temperature
            )));
        }
        Ok(())
    }
}
