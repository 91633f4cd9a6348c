//! # Decode Command
//!
//! `txfield decode <RLP_HEX>` strictly decodes a legacy transaction and
//! prints its canonical fields.
//!
//! ## Output Formats
//!
//! Hex prints one `name value` line per present field, then the hash:
//!
//! ```text
//! nonce    0x9
//! gasPrice 0x4a817c800
//! ...
//! hash     0x33469b...
//! ```
//!
//! JSON wraps the transaction object:
//!
//! ```json
//! { "tx": { "nonce": "0x9", ... }, "hash": "0x33469b...", "signed": true }
//! ```

use alloy_primitives::keccak256;
use serde::Serialize;
use txfield_chain::legacy;
use txfield_core::input::decode_hex;
use txfield_core::{FieldError, JsonTx, ParseError, FIELD_NAMES};

use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};
use crate::cli::output::{format_hex_output, OutputSettings};

/// Errors from the decode command.
#[derive(Debug, thiserror::Error)]
pub enum DecodeCommandError {
    /// The argument is not hex.
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] FieldError),

    /// The bytes are not a canonical legacy transaction.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] ParseError),

    /// The result could not be serialized.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl DecodeCommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidHex(_) | Self::InvalidTransaction(_) => EXIT_INVALID_INPUT,
            Self::Output(_) => EXIT_ERROR,
        }
    }
}

/// JSON document printed by the decode command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeOutput {
    /// Canonical fields; absent ones are omitted.
    pub tx: JsonTx,
    /// Keccak-256 of the input bytes.
    pub hash: String,
    /// Whether `v`, `r` and `s` are all present.
    pub signed: bool,
}

/// The `txfield decode` command handler.
#[derive(Debug, Clone)]
pub struct DecodeCommand {
    /// Raw transaction hex, with or without `0x`.
    pub rlp_hex: String,
    /// Resolved output format.
    pub output: OutputSettings,
}

impl DecodeCommand {
    /// Create a new `DecodeCommand`.
    #[must_use]
    pub fn new(rlp_hex: impl Into<String>, output: OutputSettings) -> Self {
        Self {
            rlp_hex: rlp_hex.into(),
            output,
        }
    }

    /// Decode the transaction and render it without printing.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeCommandError::InvalidHex`] if the argument is not hex
    /// and [`DecodeCommandError::InvalidTransaction`] if the bytes are not a
    /// canonical six or nine field legacy transaction.
    pub fn render(&self) -> Result<String, DecodeCommandError> {
        let bytes = decode_hex(self.rlp_hex.trim())?;
        let tx = legacy::decode(&bytes)?;

        let doc = DecodeOutput {
            tx: tx.to_json(),
            hash: format_hex_output(keccak256(&bytes).as_slice()),
            signed: tx.is_signed(),
        };

        if self.output.is_json() {
            Ok(self.output.to_json(&doc)?)
        } else {
            Ok(format_lines(&doc))
        }
    }

    /// Run the command, printing the result to stdout.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn run(&self) -> Result<(), DecodeCommandError> {
        println!("{}", self.render()?);
        Ok(())
    }
}

/// One aligned `name value` line per present field, then the hash.
fn format_lines(doc: &DecodeOutput) -> String {
    let tx = &doc.tx;
    let values = [
        &tx.nonce,
        &tx.gas_price,
        &tx.gas_limit,
        &tx.to,
        &tx.value,
        &tx.data,
        &tx.v,
        &tx.r,
        &tx.s,
    ];
    let width = FIELD_NAMES.iter().map(|name| name.len()).max().unwrap_or(0);

    FIELD_NAMES
        .iter()
        .zip(values)
        .filter_map(|(name, value)| value.as_deref().map(|value| (*name, value)))
        .chain(std::iter::once(("hash", doc.hash.as_str())))
        .map(|(name, value)| format!("{name:<width$} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
