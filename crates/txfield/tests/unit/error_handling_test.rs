//! Error types: trait implementations, messages and exit codes.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::error::Error;

use txfield::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};
use txfield::cli::commands::{
    AddressCommandError, ConfigCommandError, DecodeCommandError, EncodeCommandError,
    QuantityCommandError,
};
use txfield::logging::LogError;
use txfield_core::{ConfigError, FieldError, ParseError};

fn json_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{").unwrap_err()
}

#[test]
fn test_error_sources() {
    let err = AddressCommandError::from(FieldError::address_length(3));
    assert!(err.source().is_none());

    let err = EncodeCommandError::Io {
        path: "tx.json".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.source().is_some());

    let err = EncodeCommandError::InvalidJson(json_error());
    assert!(err.source().is_some());

    let err = LogError::FileCreation("test".to_string());
    assert!(err.source().is_none());
}

#[test]
fn test_field_context_survives_into_messages() {
    let err = EncodeCommandError::from(FieldError::invalid_value("negative value -1").for_field("value"));
    assert_eq!(
        err.to_string(),
        "Invalid transaction: invalid value: value: negative value -1"
    );

    let err = DecodeCommandError::from(ParseError::malformed_transaction("expected 6 or 9 fields, found 7"));
    assert_eq!(
        err.to_string(),
        "Invalid transaction: malformed transaction: expected 6 or 9 fields, found 7"
    );
}

#[test]
fn test_invalid_input_exit_codes() {
    assert_eq!(
        AddressCommandError::from(FieldError::address_length(19)).exit_code(),
        EXIT_INVALID_INPUT
    );
    assert_eq!(
        QuantityCommandError::from(FieldError::invalid_encoding("x")).exit_code(),
        EXIT_INVALID_INPUT
    );
    assert_eq!(
        EncodeCommandError::InvalidJson(json_error()).exit_code(),
        EXIT_INVALID_INPUT
    );
    assert_eq!(
        DecodeCommandError::from(ParseError::invalid_rlp("short")).exit_code(),
        EXIT_INVALID_INPUT
    );
    assert_eq!(
        ConfigCommandError::from(ConfigError::parse_failed("bad")).exit_code(),
        EXIT_INVALID_INPUT
    );
}

#[test]
fn test_general_error_exit_codes() {
    assert_eq!(
        AddressCommandError::from(json_error()).exit_code(),
        EXIT_ERROR
    );
    assert_eq!(
        EncodeCommandError::Output(json_error()).exit_code(),
        EXIT_ERROR
    );
    assert_eq!(
        ConfigCommandError::from(ConfigError::no_home_directory()).exit_code(),
        EXIT_ERROR
    );
    assert_eq!(
        ConfigCommandError::AlreadyExists {
            path: "/tmp/x".to_string()
        }
        .exit_code(),
        EXIT_ERROR
    );
}

#[test]
fn test_errors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AddressCommandError>();
    assert_send_sync::<QuantityCommandError>();
    assert_send_sync::<EncodeCommandError>();
    assert_send_sync::<DecodeCommandError>();
    assert_send_sync::<ConfigCommandError>();
    assert_send_sync::<LogError>();
}
