pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod services;
pub mod utils;

pub use analysis::{AnalysisRequest, AnalysisResult, Factor, NormalizedRequest, FACTORS};
pub use config::{CredentialSource, EnvConfig, ServiceConfig};
pub use error::{AnalysisError, Result};
pub use llm::{
    DynLlmClient, FixedClientFactory, GeminiClient, GeminiClientFactory, LlmClient,
    LlmClientFactory, LlmRequest, LlmResponse, ScriptedClient, ScriptedReply,
};
pub use server::{create_router, run_server, AppState};
pub use services::{
    AnalysisService, AttemptOutcome, ChainState, FallbackOrchestrator, FallbackPolicy,
    FallbackRun, ModelInvoker, PromptBuilder, ResponseExtractor,
};
pub use utils::{logging, validation};
