//! 分析服务
//!
//! 依赖顺序：
//! - `prompt_builder`: 请求参数 -> prompt 文本
//! - `model_invoker`: 对某个模型发起一次调用
//! - `response_extractor`: 清理、解析并校验模型输出
//! - `fallback`: 按顺序尝试候选模型，首个模型受截止时间约束
//! - `analysis_service`: 串起以上步骤，供 HTTP 和命令行使用

pub mod analysis_service;
pub mod constants;
pub mod fallback;
pub mod model_invoker;
pub mod prompt_builder;
pub mod response_cleaner;
pub mod response_extractor;

pub use analysis_service::AnalysisService;
pub use fallback::{
    AttemptOutcome, AttemptResult, ChainState, FallbackOrchestrator, FallbackPolicy, FallbackRun,
    DEFAULT_FIRST_ATTEMPT_TIMEOUT,
};
pub use model_invoker::ModelInvoker;
pub use prompt_builder::PromptBuilder;
pub use response_cleaner::clean_response;
pub use response_extractor::ResponseExtractor;
