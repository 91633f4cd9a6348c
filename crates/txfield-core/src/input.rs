//! Loose input representations accepted at field-assignment time.
//!
//! Callers hand transaction fields over in whatever shape they have: raw
//! bytes, hex strings, decimal strings, native integers or `U256`. Each kind
//! of field has one sum type listing the accepted shapes:
//!
//! - [`AddressInput`] - recipient addresses
//! - [`BytesInput`] - opaque byte fields such as `data`
//! - [`NumericInput`] - integer fields (`nonce`, `gasPrice`, `value`, ...)
//!
//! Each type has exactly one normalization function (`into_bytes` or
//! `into_u256`) that produces the canonical internal form. Validation of the
//! result (address length, value range) happens after that single dispatch.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use txfield_core::input::{BytesInput, NumericInput};
//!
//! assert_eq!(NumericInput::from("0x10").into_u256().unwrap(), U256::from(16u64));
//! assert_eq!(NumericInput::from("16").into_u256().unwrap(), U256::from(16u64));
//! assert_eq!(NumericInput::from(16u8).into_u256().unwrap(), U256::from(16u64));
//!
//! assert_eq!(BytesInput::from("0xdead").into_bytes().unwrap(), vec![0xde, 0xad]);
//! ```

use alloy_primitives::{Bytes, U256};

use crate::address::Address;
use crate::config::InputConfig;
use crate::error::FieldError;
use crate::numeric::to_minimal_bytes;

/// Strip a single `0x` or `0X` prefix, if present.
///
/// # Examples
///
/// ```
/// use txfield_core::input::strip_hex_prefix;
///
/// assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
/// assert_eq!(strip_hex_prefix("0XABCD"), "ABCD");
/// assert_eq!(strip_hex_prefix("abcd"), "abcd");
/// ```
#[must_use]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a hex string into bytes.
///
/// The `0x` prefix is optional and digits are case-insensitive. An empty
/// digit string decodes to an empty byte vector.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEncoding`] if the digit count is odd or a
/// character is not a hex digit (including a repeated `0x` prefix).
///
/// # Examples
///
/// ```
/// use txfield_core::input::decode_hex;
///
/// assert_eq!(decode_hex("0xABcd").unwrap(), vec![0xab, 0xcd]);
/// assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
/// assert!(decode_hex("0xabc").is_err());
/// assert!(decode_hex("0x0xab").is_err());
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>, FieldError> {
    let digits = strip_hex_prefix(s);
    let offset = s.len() - digits.len();

    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::OddLength => FieldError::invalid_encoding(format!(
            "hex string has an odd number of digits ({})",
            digits.len()
        )),
        hex::FromHexError::InvalidHexCharacter { c, index } => FieldError::invalid_encoding(
            format!("invalid hex character {c:?} at position {}", index + offset),
        ),
        other => FieldError::invalid_encoding(other.to_string()),
    })
}

/// Any value that can produce its own byte representation.
///
/// Lets objects such as [`Address`] or `U256` be passed where a byte field is
/// expected, via [`BytesInput::from_transformable`].
pub trait ToBuffer {
    /// Returns the byte representation of this value.
    fn to_buffer(&self) -> Vec<u8>;
}

impl ToBuffer for U256 {
    fn to_buffer(&self) -> Vec<u8> {
        to_minimal_bytes(Some(*self))
    }
}

impl ToBuffer for Bytes {
    fn to_buffer(&self) -> Vec<u8> {
        self.to_vec()
    }
}

// ============================================================================
// AddressInput
// ============================================================================

/// The shapes accepted for an address-typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Raw bytes, used as-is.
    Bytes(Vec<u8>),
    /// Hex string with or without `0x` prefix.
    Hex(String),
    /// An already validated address; its bytes are copied.
    Address(Address),
}

impl AddressInput {
    /// Normalize into the raw address bytes.
    ///
    /// The length is not checked here; that is [`Address::new`]'s job.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidEncoding`] if a hex string is malformed.
    pub fn into_bytes(self) -> Result<Vec<u8>, FieldError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Hex(s) => decode_hex(&s),
            Self::Address(address) => Ok(address.to_vec()),
        }
    }
}

impl From<Vec<u8>> for AddressInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for AddressInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<[u8; 20]> for AddressInput {
    fn from(bytes: [u8; 20]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<&str> for AddressInput {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<&Address> for AddressInput {
    fn from(address: &Address) -> Self {
        Self::Address(*address)
    }
}

impl From<alloy_primitives::Address> for AddressInput {
    fn from(address: alloy_primitives::Address) -> Self {
        Self::Address(Address::from(address))
    }
}

// ============================================================================
// BytesInput
// ============================================================================

/// The shapes accepted for an opaque byte field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesInput {
    /// Raw bytes, used as-is.
    Bytes(Vec<u8>),
    /// Hex string with or without `0x` prefix.
    Hex(String),
    /// A native number, converted to its shortest even-length big-endian form.
    Number(u64),
}

impl BytesInput {
    /// Wrap any [`ToBuffer`] implementor.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use txfield_core::input::BytesInput;
    ///
    /// let input = BytesInput::from_transformable(&U256::from(0x0102u64));
    /// assert_eq!(input.into_bytes().unwrap(), vec![0x01, 0x02]);
    /// ```
    #[must_use]
    pub fn from_transformable(value: &impl ToBuffer) -> Self {
        Self::Bytes(value.to_buffer())
    }

    /// Normalize into raw bytes.
    ///
    /// A number keeps at least one byte, so `0` becomes `[0x00]`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidEncoding`] if a hex string is malformed.
    pub fn into_bytes(self) -> Result<Vec<u8>, FieldError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Hex(s) => decode_hex(&s),
            Self::Number(n) => {
                let bytes = n.to_be_bytes();
                let start = bytes
                    .iter()
                    .position(|&b| b != 0)
                    .unwrap_or(bytes.len() - 1);
                Ok(bytes.get(start..).unwrap_or_default().to_vec())
            }
        }
    }
}

impl From<Vec<u8>> for BytesInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for BytesInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for BytesInput {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<&str> for BytesInput {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_string())
    }
}

impl From<String> for BytesInput {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<u64> for BytesInput {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

// ============================================================================
// NumericInput
// ============================================================================

/// The shapes accepted for an unsigned integer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    /// An arbitrary-precision value.
    Big(U256),
    /// A `0x`-prefixed hex quantity or a decimal string.
    Text(String),
    /// A native machine integer; negative values are rejected.
    Native(i128),
}

impl NumericInput {
    /// Normalize into a `U256` using the default [`InputConfig`].
    ///
    /// # Errors
    ///
    /// See [`into_u256_with`](Self::into_u256_with).
    pub fn into_u256(self) -> Result<U256, FieldError> {
        self.into_u256_with(&InputConfig::default())
    }

    /// Normalize into a `U256`.
    ///
    /// Text starting with `0x`/`0X` is read as hex and may have an odd number
    /// of digits. Other text is read as decimal when
    /// [`InputConfig::decimal_strings`] is set. A single leading `-` is
    /// allowed only in front of a zero (`"-0"` is zero).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidValue`] for negative numbers and for values
    /// that do not fit in 256 bits.
    /// Returns [`FieldError::InvalidEncoding`] for empty or malformed text
    /// (including more than one sign), and for decimal text when decimal
    /// strings are disabled.
    pub fn into_u256_with(self, config: &InputConfig) -> Result<U256, FieldError> {
        match self {
            Self::Big(value) => Ok(value),
            Self::Native(n) if n < 0 => {
                Err(FieldError::invalid_value(format!("negative value {n}")))
            }
            Self::Native(n) => Ok(U256::from(n.unsigned_abs())),
            Self::Text(text) => parse_text(&text, config),
        }
    }
}

fn parse_text(text: &str, config: &InputConfig) -> Result<U256, FieldError> {
    if let Some(rest) = text.strip_prefix('-') {
        if rest.starts_with('-') {
            return Err(FieldError::invalid_encoding(format!(
                "more than one sign in {text:?}"
            )));
        }
        // Negative zero is zero, like the native integer `-0`.
        let magnitude = parse_unsigned(rest, config)?;
        if magnitude.is_zero() {
            return Ok(U256::ZERO);
        }
        return Err(FieldError::invalid_value(format!("negative value {text}")));
    }

    parse_unsigned(text, config)
}

fn parse_unsigned(text: &str, config: &InputConfig) -> Result<U256, FieldError> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return parse_digits(digits, 16, 2);
    }

    if !config.decimal_strings {
        return Err(FieldError::invalid_encoding(format!(
            "expected a 0x-prefixed hex quantity, got {text:?}"
        )));
    }

    parse_digits(text, 10, 0)
}

fn parse_digits(digits: &str, radix: u32, offset: usize) -> Result<U256, FieldError> {
    if digits.is_empty() {
        return Err(FieldError::invalid_encoding("numeric string has no digits"));
    }

    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_digit(radix)) {
        return Err(FieldError::invalid_encoding(format!(
            "invalid base-{radix} digit {c:?} at position {}",
            index + offset
        )));
    }

    U256::from_str_radix(digits, u64::from(radix))
        .map_err(|_| FieldError::invalid_value("value exceeds 256 bits"))
}

impl From<U256> for NumericInput {
    fn from(value: U256) -> Self {
        Self::Big(value)
    }
}

impl From<&U256> for NumericInput {
    fn from(value: &U256) -> Self {
        Self::Big(*value)
    }
}

impl From<u128> for NumericInput {
    fn from(value: u128) -> Self {
        Self::Big(U256::from(value))
    }
}

impl From<usize> for NumericInput {
    fn from(value: usize) -> Self {
        Self::Big(U256::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    Self::Native(i128::from(value))
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64, i8, i16, i32, i64, i128);
