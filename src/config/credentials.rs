use super::env::EnvConfig;

/// API Key 来源
///
/// `Env` 在每次请求时重新读取环境变量，不做缓存
#[derive(Clone, Debug)]
pub enum CredentialSource {
    Env(String),
    Static(Option<String>),
}

impl CredentialSource {
    pub fn from_env(var: impl Into<String>) -> Self {
        CredentialSource::Env(var.into())
    }

    pub fn resolve(&self) -> Option<String> {
        match self {
            CredentialSource::Env(var) => EnvConfig::get_env_optional(var),
            CredentialSource::Static(key) => key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }
}
