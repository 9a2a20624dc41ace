pub mod credentials;
pub mod env;
pub mod service_config;

pub use credentials::CredentialSource;
pub use env::EnvConfig;
pub use service_config::{
    overrides, FallbackSettings, ProviderSettings, ServiceConfig, DEFAULT_API_KEY_ENV, DEFAULT_BIND,
    DEFAULT_CANDIDATES, DEFAULT_FIRST_ATTEMPT_TIMEOUT_MS,
};
