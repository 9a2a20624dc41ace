//! 分析领域模型
//!
//! - `request`: 入站请求与校验
//! - `factors`: 固定的评分维度列表
//! - `result`: 模型输出的结构化结果

pub mod factors;
pub mod request;
pub mod result;

pub use factors::{factor_names, Factor, FACTORS};
pub use request::{
    AnalysisRequest, NormalizedRequest, DEFAULT_BUSINESS_MODEL, DEFAULT_TARGET_MARKET,
    PRODUCT_NAME_REQUIRED,
};
pub use result::AnalysisResult;
