//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations, and that tracing never changes results.

use mermaid2plantuml::convert;
use mermaid2plantuml::core::logging::{init_logging, LogFormat};
use std::str::FromStr;
use tracing_subscriber::util::SubscriberInitExt;

const INPUT: &str = "classDiagram\n    Animal <|-- Dog\n    class Dog {\n        +bark()\n    }";

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_levels_do_not_panic() {
    // Only the first call installs a subscriber; the rest fail gracefully
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("off"), Some("json"));
    let _ = init_logging(Some("not-a-level"), Some("pretty"));
    let _ = init_logging(None, None);
}

#[test]
fn test_tracing_does_not_change_output() {
    let plain = convert(INPUT).unwrap();

    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let traced = convert(INPUT).unwrap();
    assert_eq!(plain, traced);
}

#[test]
fn test_tracing_during_failed_conversion() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    assert!(convert("classDiagram\n    class A {\n        ???\n    }").is_err());
    assert!(convert("classDiagram\n    class A {\n        +String id").is_ok());
}
