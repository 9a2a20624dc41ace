/// 服务相关的常量定义
///
/// 统一管理 prompt 文本、代码块标记和对外错误信息

/// Prompt 文本片段
pub mod prompt {
    pub const PERSONA: &str =
        "You are an expert e-commerce market analyst who evaluates product ideas for online sellers.";

    pub const FACTOR_HEADER: &str =
        "Score the product on each of the following factors. Every score is a number from 1 to 10, where higher is always better for the seller:";

    pub const OUTPUT_SHAPE: &str = "Respond with a single JSON object that has exactly these top-level keys:
- \"pros\": an array of 3 short strings, the strongest reasons to sell this product.
- \"cons\": an array of 3 short strings, the biggest risks or drawbacks.
- \"factors\": an object keyed by the factor names listed above. Each value is an object of the form {\"score\": <number>, \"reason\": \"<one sentence>\"}.";

    pub const OUTPUT_RULES: &str = "Return only the raw JSON object. Do not add any explanation before or after it, and do not wrap it in markdown code fences.";
}

/// JSON 代码块标记
pub mod fence {
    pub const JSON_CODE_BLOCK_START: &str = "```json";
    pub const CODE_BLOCK: &str = "```";
}

/// 对外返回的错误信息
pub mod messages {
    pub const MISSING_API_KEY: &str = "Server configuration error: API key is not set.";
    pub const INVALID_BODY: &str = "Invalid request body.";
    pub const ANALYSIS_FAILED: &str = "Failed to get analysis after multiple attempts.";
    pub const DIAGNOSTICS: &str = "productlens analysis service is running.";
}
