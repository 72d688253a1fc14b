use crate::ServerType;

use std::str::FromStr;

#[test]
fn test_server_type_as_str() {
    assert_eq!(ServerType::Java.as_str(), "java");
    assert_eq!(ServerType::Bedrock.as_str(), "bedrock");
}

#[test]
fn test_server_type_from_str() {
    assert_eq!(ServerType::from_str("java").unwrap(), ServerType::Java);
    assert_eq!(ServerType::from_str("bedrock").unwrap(), ServerType::Bedrock);
    assert!(ServerType::from_str("Bedrock").is_err());
    assert!(ServerType::from_str("pocket").is_err());
}

#[test]
fn test_server_type_default() {
    assert_eq!(ServerType::default(), ServerType::Java);
}

#[test]
fn test_server_type_path_prefix() {
    assert_eq!(ServerType::Java.path_prefix(), None);
    assert_eq!(ServerType::Bedrock.path_prefix(), Some("bedrock"));
}

#[test]
fn test_server_type_deserializes_lowercase() {
    let parsed: ServerType = serde_json::from_str("\"bedrock\"").unwrap();
    assert_eq!(parsed, ServerType::Bedrock);
}
