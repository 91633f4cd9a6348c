//! # txfield-chain
//!
//! RLP serialization of canonical transaction fields.
//!
//! The byte-level framing is delegated to `alloy-rlp`; this crate arranges
//! [`TxFields`](txfield_core::TxFields) values into the legacy nine-field
//! list, decodes such lists strictly, and hashes them.
//!
//! ## Modules
//!
//! - [`rlp`] - Flat byte-string list helpers over `alloy-rlp`
//! - [`legacy`] - Legacy transaction encode, decode and hash
//!
//! ## Example
//!
//! ```rust
//! use txfield_chain::legacy;
//! use txfield_core::types::TxData;
//!
//! let tx = TxData::new()
//!     .nonce(0u8)
//!     .gas_price("0x3b9aca00")
//!     .gas_limit(21_000u32)
//!     .to("0x000000000000000000000000000000000000dead")
//!     .value("1")
//!     .normalize()
//!     .unwrap();
//!
//! let encoded = legacy::encode(&tx);
//! let hash = legacy::tx_hash(&tx);
//! assert_eq!(legacy::decode(&encoded).unwrap().to(), tx.to());
//! assert_eq!(hash.len(), 32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod legacy;
pub mod rlp;

pub use legacy::{decode, encode, encode_unsigned, signing_hash, tx_hash};
