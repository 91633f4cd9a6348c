//! # Test Utilities for `txfield`
//!
//! ## Functions
//!
//! - [`load_fixture`] - Load a JSON fixture file from the fixtures directory
//! - [`temp_data_dir`] - Create an isolated temporary directory for test data
//!
//! ## Proptest Strategies
//!
//! - [`address_hex`] - 20-byte addresses in random letter case
//! - [`quantity_text`] - A `U256` rendered as decimal or padded hex
//! - [`json_tx`] - A `JsonTx` whose fields are all valid

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::TempDir;
use txfield_core::{JsonTx, U256};

/// Error type for fixture loading operations.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be found.
    #[error("Fixture not found: {0}")]
    NotFound(String),

    /// The fixture file could not be read.
    #[error("Failed to read fixture: {0}")]
    ReadError(#[from] std::io::Error),

    /// The fixture JSON could not be parsed.
    #[error("Failed to parse fixture JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Load a JSON fixture file from `tests/fixtures/` at the workspace root.
///
/// ```ignore
/// let fixture = load_fixture("legacy/eip155_transfer.json")?;
/// let rlp = fixture["rlp"].as_str().unwrap();
/// ```
pub fn load_fixture(path: &str) -> Result<serde_json::Value, FixtureError> {
    let fixture_path = fixtures_dir().join(path);

    if !fixture_path.exists() {
        return Err(FixtureError::NotFound(fixture_path.display().to_string()));
    }

    let content = std::fs::read_to_string(&fixture_path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Path of a fixture file, for commands that read files themselves.
#[must_use]
pub fn fixture_path(path: &str) -> PathBuf {
    fixtures_dir().join(path)
}

fn fixtures_dir() -> PathBuf {
    // crates/txfield -> crates -> workspace
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir)
        .parent()
        .and_then(|p| p.parent())
        .map_or_else(
            || PathBuf::from("tests/fixtures"),
            |p| p.join("tests").join("fixtures"),
        )
}

/// Create a temporary directory that is removed on drop.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
#[must_use]
pub fn temp_data_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("txfield-test-")
        .tempdir()
        .expect("Failed to create temporary directory for test")
}

// =============================================================================
// Proptest Strategies
// =============================================================================

/// A 20-byte address as `0x` hex with each letter randomly upper or lower case.
pub fn address_hex() -> impl Strategy<Value = String> {
    (any::<[u8; 20]>(), any::<u64>()).prop_map(|(bytes, mask)| {
        let mixed: String = hex::encode(bytes)
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if (mask >> (i % 64)) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        format!("0x{mixed}")
    })
}

/// A value and one of its accepted spellings: decimal, or hex with up to
/// three leading zero digits.
pub fn quantity_text() -> impl Strategy<Value = (U256, String)> {
    let value = prop_oneof![
        Just(U256::ZERO),
        any::<u64>().prop_map(U256::from),
        any::<[u8; 32]>().prop_map(|bytes| U256::from_be_bytes::<32>(bytes)),
    ];
    (value, any::<bool>(), 0usize..4).prop_map(|(value, decimal, zeros)| {
        let text = if decimal {
            value.to_string()
        } else {
            let digits = hex::encode(value.to_be_bytes::<32>());
            let digits = digits.trim_start_matches('0');
            let digits = if digits.is_empty() { "0" } else { digits };
            format!("0x{}{digits}", "0".repeat(zeros))
        };
        (value, text)
    })
}

/// A JSON transaction with every field present and valid.
pub fn json_tx() -> impl Strategy<Value = JsonTx> {
    (
        quantity_text(),
        quantity_text(),
        quantity_text(),
        proptest::option::of(address_hex()),
        quantity_text(),
        proptest::collection::vec(any::<u8>(), 0..64),
        (27u64..=28, quantity_text(), quantity_text()),
    )
        .prop_map(|(nonce, gas_price, gas_limit, to, value, data, (v, r, s))| JsonTx {
            nonce: Some(nonce.1),
            gas_price: Some(gas_price.1),
            gas_limit: Some(gas_limit.1),
            to,
            value: Some(value.1),
            data: Some(format!("0x{}", hex::encode(data))),
            v: Some(v.to_string()),
            r: Some(r.1),
            s: Some(s.1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir_exists() {
        let dir = fixtures_dir();
        assert!(dir.exists(), "Fixtures directory should exist: {dir:?}");
    }

    #[test]
    fn test_temp_data_dir_isolation() {
        let dir1 = temp_data_dir();
        let dir2 = temp_data_dir();
        assert_ne!(dir1.path(), dir2.path());
    }

    proptest! {
        #[test]
        fn test_address_hex_format(addr in address_hex()) {
            prop_assert!(addr.starts_with("0x"));
            prop_assert_eq!(addr.len(), 42);
            prop_assert!(addr.chars().skip(2).all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_quantity_text_parses_back((value, text) in quantity_text()) {
            let parsed = txfield_core::NumericInput::from(text).into_u256().expect("valid");
            prop_assert_eq!(parsed, value);
        }
    }
}
