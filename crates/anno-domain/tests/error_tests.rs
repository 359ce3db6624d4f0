//! Unit tests for domain error types

use anno_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("document abc");
    match &error {
        Error::NotFound { resource } => assert_eq!(resource, "document abc"),
        _ => panic!("Expected NotFound error"),
    }
    assert_eq!(format!("{}", error), "document abc not found");
}

#[test]
fn test_generation_error() {
    let error = Error::generation("expected a categories object");
    match &error {
        Error::Generation { message } => assert_eq!(message, "expected a categories object"),
        _ => panic!("Expected Generation error"),
    }
    assert!(format!("{}", error).starts_with("Failed to generate annotation"));
}

#[test]
fn test_chat_error() {
    let error = Error::chat("connection refused");
    match error {
        Error::Chat { message } => assert_eq!(message, "connection refused"),
        _ => panic!("Expected Chat error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("missing file field");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "missing file field"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let source = std::io::Error::other("boom");
    let error = Error::configuration_with_source("could not read config", source);
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "could not read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: Error = io_error.into();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_utf8_error_conversion() {
    let bad = vec![0xff, 0xfe, 0xfd];
    let error: Error = String::from_utf8(bad).unwrap_err().into();
    assert!(matches!(error, Error::Utf8(_)));
}
