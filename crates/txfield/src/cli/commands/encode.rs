//! # Encode Command
//!
//! `txfield encode <FILE|->` reads a JSON transaction and prints its legacy
//! RLP encoding and hash.
//!
//! ## Input
//!
//! ```json
//! {
//!   "nonce": "0x9",
//!   "gasPrice": "20000000000",
//!   "gasLimit": "0x5208",
//!   "to": "0x3535353535353535353535353535353535353535",
//!   "value": "0xde0b6b3a7640000"
//! }
//! ```
//!
//! Every field is optional. With `--unsigned` only the first six fields are
//! encoded and the hash is the signing hash.
//!
//! ## Output Formats
//!
//! Hex prints the encoding, then the hash:
//!
//! ```text
//! 0xf86c09...
//! 0x33469b...
//! ```
//!
//! ```json
//! { "rlp": "0xf86c09...", "hash": "0x33469b...", "unsigned": false }
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use txfield_chain::legacy;
use txfield_core::{FieldError, InputConfig, JsonTx, TxFields};

use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};
use crate::cli::output::{format_hex_output, OutputSettings};

/// Path that selects stdin instead of a file.
const STDIN_PATH: &str = "-";

/// Errors from the encode command.
#[derive(Debug, thiserror::Error)]
pub enum EncodeCommandError {
    /// The input could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path, or `-` for stdin.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON transaction object.
    #[error("Invalid JSON transaction: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A field could not be canonicalized.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] FieldError),

    /// The result could not be serialized.
    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

impl EncodeCommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidJson(_) | Self::InvalidTransaction(_) => EXIT_INVALID_INPUT,
            Self::Io { .. } | Self::Output(_) => EXIT_ERROR,
        }
    }
}

/// JSON document printed by the encode command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeOutput {
    /// The RLP encoding as `0x` hex.
    pub rlp: String,
    /// Keccak-256 of `rlp`.
    pub hash: String,
    /// Whether only the unsigned fields were encoded.
    pub unsigned: bool,
}

/// The `txfield encode` command handler.
#[derive(Debug, Clone)]
pub struct EncodeCommand {
    /// JSON file, or `-` for stdin.
    pub file: PathBuf,
    /// Encode the six unsigned fields only.
    pub unsigned: bool,
    /// Which loose numeric forms are accepted.
    pub input: InputConfig,
    /// Resolved output format.
    pub output: OutputSettings,
}

impl EncodeCommand {
    /// Create a new `EncodeCommand`.
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        unsigned: bool,
        input: InputConfig,
        output: OutputSettings,
    ) -> Self {
        Self {
            file: file.into(),
            unsigned,
            input,
            output,
        }
    }

    /// Read the transaction from the configured file or stdin and render it.
    ///
    /// # Errors
    ///
    /// See [`render_from`](Self::render_from), plus
    /// [`EncodeCommandError::Io`] if the input cannot be read.
    pub fn render(&self) -> Result<String, EncodeCommandError> {
        if self.file == Path::new(STDIN_PATH) {
            self.render_from(io::stdin().lock())
        } else {
            let path = self.file.display().to_string();
            let file = fs::File::open(&self.file)
                .map_err(|source| EncodeCommandError::Io { path, source })?;
            self.render_from(file)
        }
    }

    /// Parse a JSON transaction from `reader`, encode it, and render the result.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeCommandError::InvalidJson`] for malformed JSON or
    /// non-string fields, and [`EncodeCommandError::InvalidTransaction`] for
    /// a field that fails canonicalization.
    pub fn render_from(&self, mut reader: impl Read) -> Result<String, EncodeCommandError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| EncodeCommandError::Io {
                path: self.file.display().to_string(),
                source,
            })?;

        let json: JsonTx = serde_json::from_str(&text).map_err(EncodeCommandError::InvalidJson)?;
        let tx = TxFields::from_json_with(&json, &self.input)?;

        let doc = self.encode(&tx);

        if self.output.is_json() {
            self.output
                .to_json(&doc)
                .map_err(EncodeCommandError::Output)
        } else {
            Ok(format!("{}\n{}", doc.rlp, doc.hash))
        }
    }

    fn encode(&self, tx: &TxFields) -> EncodeOutput {
        let (rlp, hash) = if self.unsigned {
            (legacy::encode_unsigned(tx), legacy::signing_hash(tx))
        } else {
            (legacy::encode(tx), legacy::tx_hash(tx))
        };
        tracing::info!(
            unsigned = self.unsigned,
            signed = tx.is_signed(),
            length = rlp.len(),
            %hash,
            "encoded legacy transaction"
        );

        EncodeOutput {
            rlp: format_hex_output(&rlp),
            hash: format_hex_output(hash.as_slice()),
            unsigned: self.unsigned,
        }
    }

    /// Run the command, printing the result to stdout.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn run(&self) -> Result<(), EncodeCommandError> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::indexing_slicing)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use txfield_core::OutputFormat;

    const EIP155_JSON: &str = r#"{
        "nonce": "9",
        "gasPrice": "20000000000",
        "gasLimit": "0x5208",
        "to": "0x3535353535353535353535353535353535353535",
        "value": "1000000000000000000",
        "v": "37",
        "r": "0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276",
        "s": "0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
    }"#;

    const EIP155_SIGNED: &str = "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83";

    fn command(unsigned: bool, format: OutputFormat) -> EncodeCommand {
        EncodeCommand::new(
            "-",
            unsigned,
            InputConfig::default(),
            OutputSettings {
                format,
                pretty: false,
            },
        )
    }

    #[test]
    fn test_encode_known_vector_hex() {
        let out = command(false, OutputFormat::Hex)
            .render_from(EIP155_JSON.as_bytes())
            .expect("valid");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], EIP155_SIGNED);

        let tx = legacy::decode(&txfield_core::input::decode_hex(EIP155_SIGNED).expect("hex"))
            .expect("decode");
        assert_eq!(lines[1], format_hex_output(legacy::tx_hash(&tx).as_slice()));
    }

    #[test]
    fn test_encode_unsigned_json() {
        let out = command(true, OutputFormat::Json)
            .render_from(EIP155_JSON.as_bytes())
            .expect("valid");
        let doc: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(doc["unsigned"], true);

        let rlp = doc["rlp"].as_str().expect("rlp string");
        let tx = legacy::decode(&txfield_core::input::decode_hex(rlp).expect("hex"))
            .expect("unsigned decodes");
        assert!(!tx.is_signed());
        assert_eq!(
            doc["hash"].as_str().expect("hash string"),
            format_hex_output(legacy::signing_hash(&tx).as_slice())
        );
    }

    #[test]
    fn test_empty_object_encodes_empty_fields() {
        let out = command(true, OutputFormat::Hex)
            .render_from(&b"{}"[..])
            .expect("valid");
        assert!(out.starts_with("0xc6808080808080\n"));
    }

    #[test]
    fn test_reads_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(EIP155_JSON.as_bytes()).expect("write");

        let cmd = EncodeCommand::new(
            file.path(),
            false,
            InputConfig::default(),
            OutputSettings::default(),
        );
        let out = cmd.render().expect("valid");
        assert!(out.starts_with(EIP155_SIGNED));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cmd = EncodeCommand::new(
            "/nonexistent/txfield/tx.json",
            false,
            InputConfig::default(),
            OutputSettings::default(),
        );
        let err = cmd.render().expect_err("missing");
        assert!(matches!(err, EncodeCommandError::Io { .. }));
        assert_eq!(err.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn test_invalid_json_is_invalid_input() {
        let err = command(false, OutputFormat::Hex)
            .render_from(&b"{\"nonce\": 9}"[..])
            .expect_err("number instead of string");
        assert!(matches!(err, EncodeCommandError::InvalidJson(_)));
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_invalid_field_names_the_field() {
        let err = command(false, OutputFormat::Hex)
            .render_from(&br#"{"to": "0x1234"}"#[..])
            .expect_err("short address");
        assert!(matches!(err, EncodeCommandError::InvalidTransaction(_)));
        assert!(err.to_string().contains("to"));
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_decimal_strings_respect_config() {
        let cmd = EncodeCommand::new(
            "-",
            false,
            InputConfig {
                decimal_strings: false,
            },
            OutputSettings::default(),
        );
        let err = cmd
            .render_from(&br#"{"nonce": "9"}"#[..])
            .expect_err("decimal disabled");
        assert!(err.to_string().contains("nonce"));
    }
}
