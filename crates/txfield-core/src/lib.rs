//! # txfield-core
//!
//! Canonical values for Ethereum transaction fields.
//!
//! Transaction fields arrive in many shapes: hex strings, decimal strings,
//! byte buffers, native integers. This crate turns them into exactly one
//! validated representation each, and produces the minimal big-endian byte
//! encoding used for RLP serialization and hashing.
//!
//! ## Modules
//!
//! - [`address`] - The 20-byte-or-empty [`Address`] value type
//! - [`numeric`] - Minimal byte and hex quantity encodings of `U256`
//! - [`input`] - Loose input shapes and their normalization
//! - [`types`] - The [`TxFields`] aggregate and its JSON form
//! - [`error`] - Error types for each layer
//! - [`config`] / [`config_loader`] - TOML configuration
//!
//! ## Example
//!
//! ```rust
//! use txfield_core::{numeric, Address, FieldError, U256};
//!
//! let to = Address::new("0xDEADBEEFdeadbeefDEADBEEFdeadbeefDEADBEEF")?;
//! assert_eq!(to.to_string(), "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef");
//!
//! assert_eq!(numeric::to_minimal_bytes(Some(U256::from(256u64))), vec![0x01, 0x00]);
//! assert_eq!(numeric::to_hex(Some(U256::ZERO))?, "0x0");
//! # Ok::<(), FieldError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod input;
pub mod numeric;
pub mod types;

pub use address::{Address, ADDRESS_LENGTH};

pub use error::{ConfigError, FieldError, ParseError};

pub use config::{Config, ConfigBuilder, InputConfig, OutputConfig, OutputFormat};

pub use config_loader::{expand_path, ConfigLoader};

pub use input::{AddressInput, BytesInput, NumericInput, ToBuffer};

pub use types::{JsonTx, TxData, TxFields, FIELD_NAMES};

// Re-export the big-integer and byte types used throughout the public API
pub use alloy_primitives::{Bytes, B256, U256};
