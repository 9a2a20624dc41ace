use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 模型返回的分析结果，每次请求新建，不做持久化
///
/// 只约束顶层结构；各维度的内容按模型原样保留，其余顶层字段放在 `extra`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub pros: Vec<Value>,
    pub cons: Vec<Value>,
    pub factors: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_factor_content_verbatim() {
        let value = json!({
            "pros": ["a"],
            "cons": ["b"],
            "factors": { "urgency": { "score": 7, "reason": null, "note": "extra" } },
            "summary": "kept"
        });
        let result: AnalysisResult = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(result.factors["urgency"]["score"], 7);
        assert_eq!(result.extra["summary"], "kept");
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }
}
