pub mod client;
pub mod factory;
pub mod http;
pub mod scripted;
pub mod types;

pub use client::{DynLlmClient, LlmClient};
pub use factory::{FixedClientFactory, GeminiClientFactory, LlmClientFactory};
pub use http::{GeminiClient, DEFAULT_GEMINI_BASE_URL};
pub use scripted::{ScriptedClient, ScriptedReply};
pub use types::{LlmRequest, LlmResponse};
