//! Config Tests

use acplink::protocol::MAX_STRING_LEN;
use acplink::{AcpError, Config};

#[test]
fn test_builder_sets_fields() {
    let config = Config::builder()
        .name("swaf")
        .protocol_min(2)
        .protocol_max(4)
        .build();

    assert_eq!(config.name, "swaf");
    assert_eq!(config.protocol_min, 2);
    assert_eq!(config.protocol_max, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_protocol_range_shorthand() {
    let a = Config::builder().name("n").protocol_range(1, 9).build();
    let b = Config::builder().name("n").protocol_min(1).protocol_max(9).build();
    assert_eq!(a, b);
}

#[test]
fn test_default_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_supports_is_inclusive() {
    let config = Config::builder().name("n").protocol_range(1, 3).build();

    assert!(!config.supports(0));
    assert!(config.supports(1));
    assert!(config.supports(2));
    assert!(config.supports(3));
    assert!(!config.supports(4));
}

#[test]
fn test_validate_accepts_inverted_range() {
    let config = Config::builder().name("n").protocol_range(5, 4).build();
    assert!(config.validate().is_ok());
    assert!(!config.supports(4));
    assert!(!config.supports(5));
}

#[test]
fn test_validate_accepts_empty_name() {
    let config = Config::builder().name("").protocol_range(1, 1).build();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_unencodable_name() {
    let config = Config::builder()
        .name("x".repeat(MAX_STRING_LEN + 1))
        .protocol_range(1, 1)
        .build();
    assert!(matches!(config.validate(), Err(AcpError::Config(_))));

    let config = Config::builder()
        .name("x".repeat(MAX_STRING_LEN))
        .protocol_range(1, 1)
        .build();
    assert!(config.validate().is_ok());
}
