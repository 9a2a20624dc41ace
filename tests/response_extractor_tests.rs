use productlens::{AnalysisError, AnalysisResult, ResponseExtractor, FACTORS};
use serde_json::{json, Map, Value};

fn full_result() -> AnalysisResult {
    let factors: Map<String, Value> = FACTORS
        .iter()
        .enumerate()
        .map(|(i, factor)| {
            (
                factor.name.to_string(),
                json!({
                    "score": 1.0 + i as f64 * 0.5,
                    "reason": format!("Reason for {} with \"quotes\" and ```", factor.name),
                }),
            )
        })
        .collect();

    AnalysisResult {
        pros: vec![json!("Strong demand"), json!("Low CAC"), json!("Bundles well")],
        cons: vec![json!("Bulky"), json!("Price war"), json!("Returns")],
        factors,
        extra: Map::new(),
    }
}

#[test]
fn fenced_and_padded_output_round_trips() {
    let original = full_result();
    let compact = serde_json::to_string(&original).unwrap();
    let pretty = serde_json::to_string_pretty(&original).unwrap();

    let wrappings = [
        format!("```json\n{}\n```", compact),
        format!("\n\n  ```json{}```  \n", pretty),
        format!("```\n{}\n```\n", pretty),
        format!("   {}   ", compact),
    ];

    for raw in &wrappings {
        let extracted = ResponseExtractor::extract(raw).unwrap();
        assert_eq!(extracted, original, "input: {}", raw);
    }
}

#[test]
fn rejects_plain_text() {
    let err = ResponseExtractor::extract("The product looks promising overall.").unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
}

#[test]
fn rejects_missing_factors_key() {
    let raw = r#"```json
{"pros": ["a", "b", "c"], "cons": ["d", "e", "f"]}
```"#;
    let err = ResponseExtractor::extract(raw).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
}

#[test]
fn rejects_json_array() {
    let raw = format!("[{}]", serde_json::to_string(&full_result()).unwrap());
    let err = ResponseExtractor::extract(&raw).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
}

#[test]
fn string_score_is_accepted_as_is() {
    let raw = r#"{"pros": [], "cons": [], "factors": {"riskScore": {"score": "7", "reason": "x"}}}"#;
    let result = ResponseExtractor::extract(raw).unwrap();
    assert_eq!(result.factors["riskScore"]["score"], "7");
}

#[test]
fn factor_fields_are_passed_through_unchanged() {
    let raw = r#"{"pros": ["a"], "cons": ["b"], "factors": {"urgency": {"score": 7, "reason": null, "summary": "kept"}}}"#;
    let result = ResponseExtractor::extract(raw).unwrap();

    let reencoded = serde_json::to_value(&result).unwrap();
    assert_eq!(reencoded, serde_json::from_str::<Value>(raw).unwrap());
    assert_eq!(reencoded["factors"]["urgency"]["score"].to_string(), "7");
}

#[test]
fn pros_must_be_an_array() {
    let raw = r#"{"pros": "many", "cons": [], "factors": {}}"#;
    let err = ResponseExtractor::extract(raw).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(ref m) if m.contains("pros")));
}
