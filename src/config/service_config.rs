use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::env::EnvConfig;
use crate::error::{AnalysisError, Result};
use crate::llm::DEFAULT_GEMINI_BASE_URL;
use crate::services::FallbackPolicy;
use crate::utils::ConfigValidator;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_CANDIDATES: &[&str] = &["gemini-2.5-pro", "gemini-2.5-flash", "gemini-2.5-flash-lite"];
pub const DEFAULT_FIRST_ATTEMPT_TIMEOUT_MS: u64 = 9000;

/// 环境变量覆盖项
pub mod overrides {
    pub const CONFIG_PATH: &str = "PRODUCTLENS_CONFIG";
    pub const BIND: &str = "PRODUCTLENS_BIND";
    pub const MODELS: &str = "PRODUCTLENS_MODELS";
    pub const TIMEOUT_MS: &str = "PRODUCTLENS_TIMEOUT_MS";
    pub const BASE_URL: &str = "PRODUCTLENS_PROVIDER_URL";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    /// 存放 API Key 的环境变量名；Key 本身从不写入配置文件
    pub api_key_env: String,
    pub temperature: f32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: crate::llm::types::default_temperature(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    pub candidates: Vec<String>,
    pub first_attempt_timeout_ms: u64,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|m| m.to_string()).collect(),
            first_attempt_timeout_ms: DEFAULT_FIRST_ATTEMPT_TIMEOUT_MS,
        }
    }
}

/// 服务配置
///
/// 加载顺序：默认值 -> JSON 配置文件（可选）-> 环境变量覆盖
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind: String,
    pub provider: ProviderSettings,
    pub fallback: FallbackSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            provider: ProviderSettings::default(),
            fallback: FallbackSettings::default(),
        }
    }
}

impl ServiceConfig {
    /// 按完整顺序加载并校验配置
    ///
    /// 未显式传入路径时读取 `PRODUCTLENS_CONFIG`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = EnvConfig::get_env_optional(overrides::CONFIG_PATH);
        let path = path.or(env_path.as_deref().map(Path::new));

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(EnvConfig::get_env_optional)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Configuration(format!("failed to read config `{}`: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| AnalysisError::Configuration(format!("invalid config JSON: {}", e)))
    }

    /// 应用覆盖项；`lookup` 通常是环境变量读取函数
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(overrides::BIND) {
            self.bind = bind;
        }
        if let Some(base_url) = lookup(overrides::BASE_URL) {
            self.provider.base_url = base_url;
        }
        if let Some(models) = lookup(overrides::MODELS) {
            self.fallback.candidates = models
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(timeout) = lookup(overrides::TIMEOUT_MS) {
            self.fallback.first_attempt_timeout_ms = timeout.parse().map_err(|e| {
                AnalysisError::Configuration(format!(
                    "{} must be an integer number of milliseconds: {}",
                    overrides::TIMEOUT_MS,
                    e
                ))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_bind(&self.bind)?;
        ConfigValidator::validate_url(&self.provider.base_url)?;
        ConfigValidator::validate_temperature(self.provider.temperature)?;
        if self.provider.api_key_env.trim().is_empty() {
            return Err(AnalysisError::Configuration(
                "provider.api_key_env must name an environment variable".into(),
            ));
        }
        ConfigValidator::validate_candidates(&self.fallback.candidates)?;
        ConfigValidator::validate_timeout_ms(self.fallback.first_attempt_timeout_ms)?;
        Ok(())
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy::new(self.fallback.candidates.iter().cloned()).with_first_attempt_timeout(
            Duration::from_millis(self.fallback.first_attempt_timeout_ms),
        )
    }
}
