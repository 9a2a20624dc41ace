use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

pub const DEFAULT_TARGET_MARKET: &str = "USA";
pub const DEFAULT_BUSINESS_MODEL: &str = "Amazon FBA";
pub const PRODUCT_NAME_REQUIRED: &str = "productName is required.";

/// 入站请求体，字段名与前端保持 camelCase
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub target_market: Option<String>,
    #[serde(default)]
    pub business_model: Option<String>,
}

/// 校验并补全默认值之后的请求
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub product_name: String,
    pub target_market: String,
    pub business_model: String,
}

impl AnalysisRequest {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: Some(product_name.into()),
            ..Self::default()
        }
    }

    pub fn with_target_market(mut self, market: impl Into<String>) -> Self {
        self.target_market = Some(market.into());
        self
    }

    pub fn with_business_model(mut self, model: impl Into<String>) -> Self {
        self.business_model = Some(model.into());
        self
    }

    /// 校验请求：productName 去空白后不能为空；可选字段为空白时按缺省处理
    pub fn normalize(&self) -> Result<NormalizedRequest> {
        let product_name = non_blank(self.product_name.as_deref())
            .ok_or_else(|| AnalysisError::Validation(PRODUCT_NAME_REQUIRED.to_string()))?;

        Ok(NormalizedRequest {
            product_name,
            target_market: non_blank(self.target_market.as_deref())
                .unwrap_or_else(|| DEFAULT_TARGET_MARKET.to_string()),
            business_model: non_blank(self.business_model.as_deref())
                .unwrap_or_else(|| DEFAULT_BUSINESS_MODEL.to_string()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let normalized = AnalysisRequest::new("Bamboo cutting board").normalize().unwrap();
        assert_eq!(normalized.product_name, "Bamboo cutting board");
        assert_eq!(normalized.target_market, "USA");
        assert_eq!(normalized.business_model, "Amazon FBA");
    }

    #[test]
    fn blank_optional_fields_fall_back_to_defaults() {
        let normalized = AnalysisRequest::new("Yoga mat")
            .with_target_market("   ")
            .with_business_model("")
            .normalize()
            .unwrap();
        assert_eq!(normalized.target_market, DEFAULT_TARGET_MARKET);
        assert_eq!(normalized.business_model, DEFAULT_BUSINESS_MODEL);
    }

    #[test]
    fn blank_product_name_is_rejected() {
        let err = AnalysisRequest::new("  \t ").normalize().unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(ref msg) if msg == PRODUCT_NAME_REQUIRED));

        let err = AnalysisRequest::default().normalize().unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn deserializes_camel_case_body() {
        let request: AnalysisRequest = serde_json::from_str(
            r#"{"productName":"LED desk lamp","targetMarket":"Germany","businessModel":"Shopify"}"#,
        )
        .unwrap();
        let normalized = request.normalize().unwrap();
        assert_eq!(normalized.target_market, "Germany");
        assert_eq!(normalized.business_model, "Shopify");
    }
}
