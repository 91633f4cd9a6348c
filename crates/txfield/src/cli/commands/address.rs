//! # Address Command
//!
//! `txfield address <INPUT>` prints the canonical lowercase form of an
//! address.
//!
//! ## Output Formats
//!
//! ```text
//! 0x000000000000000000000000000000000000dead
//! ```
//!
//! ```json
//! {
//!   "address": "0x000000000000000000000000000000000000dead",
//!   "empty": false
//! }
//! ```

use serde::Serialize;
use txfield_core::{Address, FieldError};

use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};
use crate::cli::output::OutputSettings;

/// Errors from the address command.
#[derive(Debug, thiserror::Error)]
pub enum AddressCommandError {
    /// The input is not a valid address.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] FieldError),

    /// The result could not be serialized.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl AddressCommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidAddress(_) => EXIT_INVALID_INPUT,
            Self::Output(_) => EXIT_ERROR,
        }
    }
}

/// JSON document printed by the address command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressOutput {
    /// Lowercase `0x` hex, `0x` alone for the empty address.
    pub address: String,
    /// Whether the input was the empty address.
    pub empty: bool,
}

/// The `txfield address` command handler.
#[derive(Debug, Clone)]
pub struct AddressCommand {
    /// Raw address text from the command line.
    pub input: String,
    /// Resolved output format.
    pub output: OutputSettings,
}

impl AddressCommand {
    /// Create a new `AddressCommand`.
    #[must_use]
    pub fn new(input: impl Into<String>, output: OutputSettings) -> Self {
        Self {
            input: input.into(),
            output,
        }
    }

    /// Canonicalize the input and render it without printing.
    ///
    /// # Errors
    ///
    /// Returns [`AddressCommandError::InvalidAddress`] for malformed hex or a
    /// length other than 0 or 20 bytes.
    pub fn render(&self) -> Result<String, AddressCommandError> {
        let address = Address::from_hex(self.input.trim())?;
        tracing::debug!(%address, empty = address.is_empty(), "canonicalized address");

        if self.output.is_json() {
            let doc = AddressOutput {
                address: address.to_string(),
                empty: address.is_empty(),
            };
            Ok(self.output.to_json(&doc)?)
        } else {
            Ok(address.to_string())
        }
    }

    /// Run the command, printing the result to stdout.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn run(&self) -> Result<(), AddressCommandError> {
        println!("{}", self.render()?);
        Ok(())
    }
}
