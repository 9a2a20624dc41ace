use std::io::Write;
use std::time::Duration;

use productlens::{AnalysisError, ServiceConfig};
use tempfile::NamedTempFile;

#[test]
fn loads_config_file_and_builds_policy() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "bind": "0.0.0.0:9090",
            "provider": {{ "temperature": 0.2 }},
            "fallback": {{
                "candidates": ["gemini-2.5-pro", "gemini-2.5-flash"],
                "first_attempt_timeout_ms": 4000
            }}
        }}"#
    )
    .unwrap();

    let config = ServiceConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.bind, "0.0.0.0:9090");
    assert_eq!(config.provider.temperature, 0.2);
    assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");

    let policy = config.fallback_policy();
    assert_eq!(policy.candidates, vec!["gemini-2.5-pro", "gemini-2.5-flash"]);
    assert_eq!(policy.first_attempt_timeout, Duration::from_millis(4000));
}

#[test]
fn invalid_json_is_configuration_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = ServiceConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, AnalysisError::Configuration(_)));
}

#[test]
fn missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServiceConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AnalysisError::Configuration(ref m) if m.contains("absent.json")));
}

#[test]
fn zero_timeout_fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fallback": {{ "first_attempt_timeout_ms": 0 }} }}"#).unwrap();

    let config = ServiceConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}
