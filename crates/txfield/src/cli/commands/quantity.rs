//! # Quantity Command
//!
//! `txfield quantity <VALUE>` normalizes a decimal or hex number and prints
//! its canonical hex quantity and minimal big-endian bytes.
//!
//! ## Output Formats
//!
//! Hex prints the quantity, then the bytes:
//!
//! ```text
//! 0x5208
//! 0x5208
//! ```
//!
//! Zero has an empty byte string:
//!
//! ```text
//! 0x0
//! 0x
//! ```
//!
//! ```json
//! { "hex": "0x5208", "bytes": "0x5208", "length": 2 }
//! ```

use serde::Serialize;
use txfield_core::numeric::{format_quantity, to_minimal_bytes};
use txfield_core::{FieldError, InputConfig, NumericInput};

use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};
use crate::cli::output::{format_hex_output, OutputSettings};

/// Errors from the quantity command.
#[derive(Debug, thiserror::Error)]
pub enum QuantityCommandError {
    /// The input is not a non-negative number below 2^256.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] FieldError),

    /// The result could not be serialized.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl QuantityCommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidQuantity(_) => EXIT_INVALID_INPUT,
            Self::Output(_) => EXIT_ERROR,
        }
    }
}

/// JSON document printed by the quantity command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityOutput {
    /// Shortest `0x` hex quantity.
    pub hex: String,
    /// Minimal big-endian bytes as `0x` hex.
    pub bytes: String,
    /// Number of bytes in the minimal encoding.
    pub length: usize,
}

/// The `txfield quantity` command handler.
#[derive(Debug, Clone)]
pub struct QuantityCommand {
    /// Raw numeric text from the command line.
    pub value: String,
    /// Which loose forms are accepted.
    pub input: InputConfig,
    /// Resolved output format.
    pub output: OutputSettings,
}

impl QuantityCommand {
    /// Create a new `QuantityCommand`.
    #[must_use]
    pub fn new(value: impl Into<String>, input: InputConfig, output: OutputSettings) -> Self {
        Self {
            value: value.into(),
            input,
            output,
        }
    }

    /// Canonicalize the value and render it without printing.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityCommandError::InvalidQuantity`] for malformed,
    /// negative or oversized numbers.
    pub fn render(&self) -> Result<String, QuantityCommandError> {
        let value = NumericInput::from(self.value.trim()).into_u256_with(&self.input)?;
        let bytes = to_minimal_bytes(Some(value));
        let doc = QuantityOutput {
            hex: format_quantity(value),
            bytes: format_hex_output(&bytes),
            length: bytes.len(),
        };
        tracing::debug!(hex = %doc.hex, length = doc.length, "canonicalized quantity");

        if self.output.is_json() {
            Ok(self.output.to_json(&doc)?)
        } else {
            Ok(format!("{}\n{}", doc.hex, doc.bytes))
        }
    }

    /// Run the command, printing the result to stdout.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn run(&self) -> Result<(), QuantityCommandError> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use txfield_core::OutputFormat;

    fn hex_cmd(value: &str) -> QuantityCommand {
        QuantityCommand::new(value, InputConfig::default(), OutputSettings::default())
    }

    #[test]
    fn test_decimal_and_hex_agree() {
        let expected = "0x5208\n0x5208";
        assert_eq!(hex_cmd("21000").render().expect("decimal"), expected);
        assert_eq!(hex_cmd("0x5208").render().expect("hex"), expected);
        assert_eq!(hex_cmd("0x005208").render().expect("padded"), expected);
    }

    #[test]
    fn test_zero() {
        assert_eq!(hex_cmd("0").render().expect("zero"), "0x0\n0x");
        assert_eq!(hex_cmd("0x0").render().expect("zero"), "0x0\n0x");
    }

    #[test]
    fn test_odd_nibble_bytes_are_padded() {
        assert_eq!(hex_cmd("0x100").render().expect("valid"), "0x100\n0x0100");
    }

    #[test]
    fn test_json_output() {
        let cmd = QuantityCommand::new(
            "1000000000",
            InputConfig::default(),
            OutputSettings {
                format: OutputFormat::Json,
                pretty: false,
            },
        );
        assert_eq!(
            cmd.render().expect("valid"),
            r#"{"hex":"0x3b9aca00","bytes":"0x3b9aca00","length":4}"#
        );
    }

    #[test]
    fn test_decimal_rejected_when_disabled() {
        let strict = InputConfig {
            decimal_strings: false,
        };
        let cmd = QuantityCommand::new("100", strict, OutputSettings::default());
        let err = cmd.render().expect_err("decimal disabled");
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);

        let cmd = QuantityCommand::new("0x64", strict, OutputSettings::default());
        assert_eq!(cmd.render().expect("hex still accepted"), "0x64\n0x64");
    }

    #[test]
    fn test_negative_and_oversized_rejected() {
        let err = hex_cmd("-1").render().expect_err("negative");
        assert!(matches!(
            err,
            QuantityCommandError::InvalidQuantity(FieldError::InvalidValue { .. })
        ));

        let too_big = format!("0x1{}", "0".repeat(64));
        let err = hex_cmd(&too_big).render().expect_err("257 bits");
        assert!(matches!(
            err,
            QuantityCommandError::InvalidQuantity(FieldError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_max_value() {
        let max = format!("0x{}", "f".repeat(64));
        let out = hex_cmd(&max).render().expect("2^256 - 1");
        assert_eq!(out, format!("{max}\n{max}"));
    }
}
