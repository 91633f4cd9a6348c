//! Legacy (pre-EIP-2718) transaction encoding.
//!
//! A legacy transaction is the RLP list of its field values in the order
//! `nonce, gasPrice, gasLimit, to, value, data, v, r, s`. Unsigned
//! transactions carry only the first six.
//!
//! Decoding is strict: every numeric item must already be in minimal form
//! and the recipient must be empty or 20 bytes. An accepted nine-item list
//! satisfies `encode(decode(bytes)) == bytes`, and an accepted six-item list
//! satisfies `encode_unsigned(decode(bytes)) == bytes`.
//!
//! # Example
//!
//! ```
//! use txfield_chain::legacy;
//! use txfield_core::types::TxData;
//!
//! let tx = TxData::new()
//!     .nonce(9u64)
//!     .gas_price("20000000000")
//!     .gas_limit(21_000u32)
//!     .to("0x3535353535353535353535353535353535353535")
//!     .value("1000000000000000000")
//!     .normalize()
//!     .unwrap();
//!
//! let encoded = legacy::encode_unsigned(&tx);
//! assert_eq!(legacy::decode(&encoded).unwrap(), tx);
//! ```

use alloy_primitives::{keccak256, B256, U256};
use txfield_core::error::{FieldError, ParseError};
use txfield_core::numeric::from_minimal_bytes;
use txfield_core::types::{TxData, TxFields, FIELD_NAMES, UNSIGNED_FIELD_COUNT};

use crate::rlp::{decode_bytes, decode_list, detect_tx_type, encode_list, is_list};

/// Encode all nine fields as an RLP list.
#[must_use]
pub fn encode(tx: &TxFields) -> Vec<u8> {
    encode_list(&tx.raw())
}

/// Encode the six unsigned fields as an RLP list.
///
/// `v`, `r` and `s` are left out even if present.
#[must_use]
pub fn encode_unsigned(tx: &TxFields) -> Vec<u8> {
    let raw = tx.raw();
    let (unsigned, _signature) = raw.split_at(UNSIGNED_FIELD_COUNT);
    encode_list(unsigned)
}

/// Keccak-256 of [`encode`], the transaction hash of a signed transaction.
#[must_use]
pub fn tx_hash(tx: &TxFields) -> B256 {
    keccak256(encode(tx))
}

/// Keccak-256 of [`encode_unsigned`].
#[must_use]
pub fn signing_hash(tx: &TxFields) -> B256 {
    keccak256(encode_unsigned(tx))
}

/// Decode an RLP-encoded legacy transaction.
///
/// Accepts a list of six (unsigned) or nine (signed) byte strings. Empty
/// `nonce`, `gasPrice`, `gasLimit` and `value` items decode to zero; empty
/// `to`, `v`, `r` and `s` items decode to absent.
///
/// # Errors
///
/// Returns [`ParseError::InvalidRlp`] if the framing is invalid or there are
/// bytes after the list.
/// Returns [`ParseError::MalformedTransaction`] for typed envelopes, a top
/// level byte string, wrong item counts and nested lists.
/// Returns [`ParseError::Field`] if a numeric item has a leading zero byte or
/// more than 32 bytes, or the recipient has the wrong length.
pub fn decode(data: &[u8]) -> Result<TxFields, ParseError> {
    if let Some(tx_type) = detect_tx_type(data) {
        return Err(ParseError::malformed_transaction(format!(
            "typed transaction envelope 0x{tx_type:02x} is not a legacy transaction"
        )));
    }

    if !data.is_empty() && !is_list(data) {
        return Err(ParseError::malformed_transaction(
            "expected an RLP list, found a byte string",
        ));
    }

    let items = decode_list(data)?;
    if items.len() != UNSIGNED_FIELD_COUNT && items.len() != FIELD_NAMES.len() {
        return Err(field_count_error(items.len()));
    }

    let values = items
        .iter()
        .zip(FIELD_NAMES)
        .map(|(item, name)| {
            decode_bytes(item).map_err(|e| {
                ParseError::malformed_transaction(format!("field {name} is not a byte string: {e}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (fields, signature) = match values.as_slice() {
        [nonce, gas_price, gas_limit, to, value, data] => {
            ([nonce, gas_price, gas_limit, to, value, data], None)
        }
        [nonce, gas_price, gas_limit, to, value, data, v, r, s] => {
            ([nonce, gas_price, gas_limit, to, value, data], Some([v, r, s]))
        }
        other => return Err(field_count_error(other.len())),
    };

    let [nonce, gas_price, gas_limit, to, value, data] = fields;

    let mut builder = TxData::new()
        .nonce(quantity(nonce, "nonce")?)
        .gas_price(quantity(gas_price, "gasPrice")?)
        .gas_limit(quantity(gas_limit, "gasLimit")?)
        .to(to.as_slice())
        .value(quantity(value, "value")?)
        .data(data.as_slice());

    if let Some([v, r, s]) = signature {
        if let Some(v) = optional_quantity(v, "v")? {
            builder = builder.v(v);
        }
        if let Some(r) = optional_quantity(r, "r")? {
            builder = builder.r(r);
        }
        if let Some(s) = optional_quantity(s, "s")? {
            builder = builder.s(s);
        }
    }

    let tx = builder.normalize()?;

    tracing::debug!(
        fields = items.len(),
        signed = tx.is_signed(),
        contract_creation = tx.is_contract_creation(),
        "decoded legacy transaction"
    );

    Ok(tx)
}

fn field_count_error(found: usize) -> ParseError {
    ParseError::malformed_transaction(format!(
        "expected {UNSIGNED_FIELD_COUNT} or {} fields, found {found}",
        FIELD_NAMES.len()
    ))
}

fn quantity(bytes: &[u8], field: &str) -> Result<U256, FieldError> {
    from_minimal_bytes(bytes).map_err(|e| e.for_field(field))
}

fn optional_quantity(bytes: &[u8], field: &str) -> Result<Option<U256>, FieldError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    quantity(bytes, field).map(Some)
}
