//! Canonical encodings of unsigned integer transaction fields.
//!
//! Every numeric field of a transaction (`nonce`, `gasPrice`, `gasLimit`,
//! `value`, `v`, `r`, `s`) is serialized in one of two forms:
//!
//! - **Minimal big-endian bytes** for RLP: no leading zero bytes, and zero is
//!   the empty byte string rather than `[0x00]`.
//! - **Quantity hex** for JSON: `0x` followed by lowercase digits with no zero
//!   padding, zero is `"0x0"`.
//!
//! Both encodings are injective, so two equal values always produce identical
//! output and re-encoding a decoded value reproduces the original bytes.
//!
//! An absent field is modelled as `None`. It encodes to empty bytes just like
//! zero, but has no hex form.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use txfield_core::numeric::{to_hex, to_minimal_bytes};
//!
//! assert_eq!(to_minimal_bytes(Some(U256::from(256u64))), vec![0x01, 0x00]);
//! assert_eq!(to_minimal_bytes(Some(U256::ZERO)), Vec::<u8>::new());
//! assert_eq!(to_minimal_bytes(None), Vec::<u8>::new());
//!
//! assert_eq!(to_hex(Some(U256::from(10u64))).unwrap(), "0xa");
//! assert!(to_hex(None).is_err());
//! ```

use alloy_primitives::U256;

use crate::error::FieldError;
use crate::input::NumericInput;

/// Maximum number of bytes in a minimal encoding (256 bits).
pub const MAX_QUANTITY_BYTES: usize = 32;

/// Encode a value as big-endian bytes with all leading zero bytes removed.
///
/// `None` and `Some(U256::ZERO)` both produce an empty vector.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use txfield_core::numeric::to_minimal_bytes;
///
/// assert_eq!(to_minimal_bytes(Some(U256::from(255u64))), vec![0xff]);
/// assert_eq!(to_minimal_bytes(Some(U256::from(256u64))), vec![0x01, 0x00]);
/// ```
#[must_use]
pub fn to_minimal_bytes(value: Option<U256>) -> Vec<u8> {
    let Some(value) = value else {
        return Vec::new();
    };

    let bytes = value.to_be_bytes::<MAX_QUANTITY_BYTES>();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(MAX_QUANTITY_BYTES);

    bytes.get(start..).unwrap_or_default().to_vec()
}

/// Decode minimal big-endian bytes back into a value.
///
/// This is the strict inverse of [`to_minimal_bytes`]: an empty slice is zero,
/// and any other encoding of the same value is rejected.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEncoding`] if the first byte is zero.
/// Returns [`FieldError::InvalidValue`] if the slice is longer than 32 bytes.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use txfield_core::numeric::from_minimal_bytes;
///
/// assert_eq!(from_minimal_bytes(&[0x01, 0x00]).unwrap(), U256::from(256u64));
/// assert_eq!(from_minimal_bytes(&[]).unwrap(), U256::ZERO);
/// assert!(from_minimal_bytes(&[0x00, 0x01]).is_err());
/// ```
pub fn from_minimal_bytes(bytes: &[u8]) -> Result<U256, FieldError> {
    if bytes.first() == Some(&0) {
        return Err(FieldError::invalid_encoding(
            "integer encoding has a leading zero byte",
        ));
    }

    U256::try_from_be_slice(bytes).ok_or_else(|| {
        FieldError::invalid_value(format!(
            "value exceeds 256 bits ({} bytes)",
            bytes.len()
        ))
    })
}

/// Format a value as a `0x`-prefixed lowercase hex quantity.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use txfield_core::numeric::format_quantity;
///
/// assert_eq!(format_quantity(U256::ZERO), "0x0");
/// assert_eq!(format_quantity(U256::from(16u64)), "0x10");
/// ```
#[must_use]
pub fn format_quantity(value: U256) -> String {
    let bytes = to_minimal_bytes(Some(value));
    if bytes.is_empty() {
        return "0x0".to_string();
    }

    // The first byte is non-zero, so at most one padding nibble needs to go.
    let digits = hex::encode(bytes);
    let digits = digits.strip_prefix('0').unwrap_or(&digits);
    format!("0x{digits}")
}

/// Format a present value as a hex quantity.
///
/// Callers that need an absent field to become an empty string must handle
/// `None` themselves.
///
/// # Errors
///
/// Returns [`FieldError::InvalidValue`] if `value` is `None`.
pub fn to_hex(value: Option<U256>) -> Result<String, FieldError> {
    value.map(format_quantity).ok_or_else(|| {
        FieldError::invalid_value("hex conversion requires a value, the field is absent")
    })
}

/// Normalize a loose numeric input and return its minimal byte encoding.
///
/// # Errors
///
/// Returns the [`FieldError`] raised by [`NumericInput::into_u256`].
///
/// # Examples
///
/// ```
/// use txfield_core::numeric::canonical_bytes;
///
/// assert_eq!(canonical_bytes("0x0100").unwrap(), vec![0x01, 0x00]);
/// assert_eq!(canonical_bytes(255u64).unwrap(), vec![0xff]);
/// assert!(canonical_bytes(-1i64).is_err());
/// ```
pub fn canonical_bytes(input: impl Into<NumericInput>) -> Result<Vec<u8>, FieldError> {
    let value = input.into().into_u256()?;
    Ok(to_minimal_bytes(Some(value)))
}

/// Normalize a loose numeric input and return its hex quantity.
///
/// # Errors
///
/// Returns the [`FieldError`] raised by [`NumericInput::into_u256`].
///
/// # Examples
///
/// ```
/// use txfield_core::numeric::canonical_hex;
///
/// assert_eq!(canonical_hex("1000").unwrap(), "0x3e8");
/// assert_eq!(canonical_hex("0x00ff").unwrap(), "0xff");
/// ```
pub fn canonical_hex(input: impl Into<NumericInput>) -> Result<String, FieldError> {
    let value = input.into().into_u256()?;
    Ok(format_quantity(value))
}
