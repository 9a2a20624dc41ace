use std::fmt::Write;

use super::constants::prompt as prompt_consts;
use crate::analysis::{Factor, NormalizedRequest, FACTORS};

/// Prompt 构建服务
pub struct PromptBuilder;

impl PromptBuilder {
    /// 构建完整的分析 prompt
    ///
    /// 同样的输入总是得到逐字节相同的输出
    pub fn build(request: &NormalizedRequest) -> String {
        Self::build_with_factors(request, FACTORS)
    }

    pub fn build_with_factors(request: &NormalizedRequest, factors: &[Factor]) -> String {
        let mut prompt = String::new();
        prompt.push_str(prompt_consts::PERSONA);
        prompt.push_str("\n\n");
        prompt.push_str(&Self::task_line(request));
        prompt.push_str("\n\n");
        prompt.push_str(&Self::factor_section(factors));
        prompt.push('\n');
        prompt.push_str(prompt_consts::OUTPUT_SHAPE);
        prompt.push_str("\n\n");
        prompt.push_str(prompt_consts::OUTPUT_RULES);
        prompt
    }

    fn task_line(request: &NormalizedRequest) -> String {
        format!(
            "Analyze the market viability of the product \"{}\" for the {} market, sold through the {} business model.",
            request.product_name, request.target_market, request.business_model
        )
    }

    /// 按固定顺序枚举评分维度，每行一个
    pub fn factor_section(factors: &[Factor]) -> String {
        let mut section = String::from(prompt_consts::FACTOR_HEADER);
        section.push('\n');
        for factor in factors {
            let _ = writeln!(section, "- {}: {}", factor.name, factor.rubric);
        }
        section
    }
}
