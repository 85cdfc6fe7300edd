// ABOUTME: Tests for validated name types and phantom-typed IDs.
// ABOUTME: Charset rules and identifier equality semantics.

use strofi::types::{AliasName, FunctionName, VersionId};

#[test]
fn function_name_accepts_typical_names() {
    assert!(FunctionName::new("orders-api").is_ok());
    assert!(FunctionName::new("orders_api_v2").is_ok());
    assert!(FunctionName::new("Fn42").is_ok());
}

#[test]
fn function_name_rejects_invalid_input() {
    assert!(FunctionName::new("").is_err());
    assert!(FunctionName::new("-leading").is_err());
    assert!(FunctionName::new("has space").is_err());
    assert!(FunctionName::new("has/slash").is_err());
    assert!(FunctionName::new(&"x".repeat(65)).is_err());
}

#[test]
fn alias_name_accepts_typical_names() {
    assert!(AliasName::new("live").is_ok());
    assert!(AliasName::new("prod-2024").is_ok());
    assert!(AliasName::new("canary_candidate").is_ok());
}

#[test]
fn alias_name_rejects_invalid_input() {
    assert!(AliasName::new("").is_err());
    assert!(AliasName::new("has space").is_err());
    assert!(AliasName::new(&"x".repeat(129)).is_err());
}

#[test]
fn alias_name_rejects_purely_numeric_names() {
    // a numeric alias would be indistinguishable from a version number
    assert!(AliasName::new("7").is_err());
    assert!(AliasName::new("2024").is_err());
    assert!(AliasName::new("v2024").is_ok());
}

#[test]
fn version_ids_compare_by_value() {
    assert_eq!(VersionId::new("1"), VersionId::new("1"));
    assert_ne!(VersionId::new("1"), VersionId::new("2"));
    assert_eq!(VersionId::new("17").to_string(), "17");
    assert_eq!(VersionId::new("17").as_str(), "17");
}
