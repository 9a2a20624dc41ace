use serde_json::Value;

use super::response_cleaner::clean_response;
use crate::analysis::AnalysisResult;
use crate::error::{AnalysisError, Result};

/// 响应解析服务：去掉代码块标记，解析 JSON，校验结构
pub struct ResponseExtractor;

impl ResponseExtractor {
    pub fn extract(raw: &str) -> Result<AnalysisResult> {
        let cleaned = clean_response(raw);
        if cleaned.is_empty() {
            return Err(AnalysisError::MalformedResponse("response is empty".to_string()));
        }

        let value: Value = serde_json::from_str(cleaned)
            .map_err(|e| AnalysisError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        Self::validate_shape(&value)?;

        // 顶层结构已确认，维度内容不再逐项校验
        serde_json::from_value(value)
            .map_err(|e| AnalysisError::MalformedResponse(format!("unexpected structure: {}", e)))
    }

    /// 只检查顶层结构，不校验 factors 的键是否与维度表一致
    fn validate_shape(value: &Value) -> Result<()> {
        let object = value.as_object().ok_or_else(|| {
            AnalysisError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(value)
            ))
        })?;

        for key in ["pros", "cons"] {
            match object.get(key) {
                Some(Value::Array(_)) => {}
                Some(other) => {
                    return Err(AnalysisError::MalformedResponse(format!(
                        "`{}` must be an array, got {}",
                        key,
                        json_kind(other)
                    )))
                }
                None => {
                    return Err(AnalysisError::MalformedResponse(format!(
                        "missing `{}` key",
                        key
                    )))
                }
            }
        }

        match object.get("factors") {
            Some(Value::Object(_)) => Ok(()),
            Some(other) => Err(AnalysisError::MalformedResponse(format!(
                "`factors` must be an object, got {}",
                json_kind(other)
            ))),
            None => Err(AnalysisError::MalformedResponse(
                "missing `factors` key".to_string(),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "pros": ["Evergreen demand", "Light to ship", "Easy to bundle"],
            "cons": ["Crowded category", "Price pressure", "Low repeat purchases"],
            "factors": {
                "riskScore": { "score": 6, "reason": "Moderate competition." },
                "seasonality": { "score": 8.5, "reason": "Sells all year." }
            }
        })
    }

    #[test]
    fn extracts_fenced_result() {
        let raw = format!("```json\n{}\n```", sample());
        let result = ResponseExtractor::extract(&raw).unwrap();
        assert_eq!(result.pros.len(), 3);
        assert_eq!(result.factors["seasonality"]["score"], 8.5);
    }

    #[test]
    fn rejects_non_json_text() {
        let err = ResponseExtractor::extract("I'm sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_missing_factors() {
        let raw = json!({ "pros": [], "cons": [] }).to_string();
        let err = ResponseExtractor::extract(&raw).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(ref m) if m.contains("factors")));
    }

    #[test]
    fn rejects_top_level_array() {
        let raw = json!([sample()]).to_string();
        let err = ResponseExtractor::extract(&raw).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(ref m) if m.contains("array")));
    }

    #[test]
    fn rejects_wrong_container_types() {
        let raw = json!({ "pros": "good", "cons": [], "factors": {} }).to_string();
        assert!(ResponseExtractor::extract(&raw).is_err());

        let raw = json!({ "pros": [], "cons": [], "factors": [] }).to_string();
        assert!(ResponseExtractor::extract(&raw).is_err());
    }

    #[test]
    fn unknown_factor_keys_are_accepted() {
        let raw = json!({
            "pros": [],
            "cons": [],
            "factors": { "profitMargin": { "score": 3, "reason": "Thin." } }
        })
        .to_string();
        let result = ResponseExtractor::extract(&raw).unwrap();
        assert!(result.factors.contains_key("profitMargin"));
    }

    #[test]
    fn factor_content_is_not_type_checked() {
        let raw = json!({
            "pros": ["Niche appeal", 3],
            "cons": [],
            "factors": {
                "riskScore": { "score": "7", "reason": null },
                "longevity": "strong"
            }
        })
        .to_string();
        let result = ResponseExtractor::extract(&raw).unwrap();
        assert_eq!(result.factors["riskScore"]["score"], "7");
        assert!(result.factors["riskScore"]["reason"].is_null());
        assert_eq!(result.factors["longevity"], "strong");
        assert_eq!(result.pros[1], 3);
    }

    #[test]
    fn empty_response_is_malformed() {
        let err = ResponseExtractor::extract("```json\n```").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }
}
