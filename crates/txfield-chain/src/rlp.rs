//! Thin wrappers over `alloy-rlp` for flat lists of byte strings.
//!
//! Legacy transactions are a single RLP list whose items are all byte
//! strings. These helpers frame and unframe that shape and map `alloy-rlp`
//! errors into [`ParseError`].
//!
//! `alloy-rlp` already rejects non-canonical framing: single bytes below
//! `0x80` wrapped in a string header, and long-form lengths that fit the
//! short form or carry leading zeros.
//!
//! # Example
//!
//! ```
//! use txfield_chain::rlp::{decode_bytes, decode_list, encode_list};
//!
//! let encoded = encode_list(&[vec![0x01], vec![], vec![0x01, 0x00]]);
//! assert_eq!(encoded, vec![0xc5, 0x01, 0x80, 0x82, 0x01, 0x00]);
//!
//! let items = decode_list(&encoded).unwrap();
//! assert_eq!(decode_bytes(items[2]).unwrap(), vec![0x01, 0x00]);
//! ```

use alloy_rlp::{Encodable, Header, PayloadView};
use txfield_core::error::ParseError;

/// Result type for RLP operations using [`ParseError`].
pub type RlpResult<T> = Result<T, ParseError>;

// ============================================================================
// Envelope Detection
// ============================================================================

/// Detect an EIP-2718 transaction type byte.
///
/// Returns `Some(type)` when the first byte is `0x00..=0x7f`, which cannot
/// start a legacy transaction. Returns `None` for RLP lists and empty input.
///
/// # Example
///
/// ```
/// use txfield_chain::rlp::detect_tx_type;
///
/// assert_eq!(detect_tx_type(&[0x02, 0xf8, 0x73]), Some(2));
/// assert_eq!(detect_tx_type(&[0xf8, 0x6c]), None);
/// assert_eq!(detect_tx_type(&[]), None);
/// ```
#[must_use]
pub fn detect_tx_type(data: &[u8]) -> Option<u8> {
    data.first().copied().filter(|&b| b <= 0x7f)
}

/// Check if data starts with an RLP list prefix (`0xc0..=0xff`).
///
/// # Example
///
/// ```
/// use txfield_chain::rlp::is_list;
///
/// assert!(is_list(&[0xc0]));
/// assert!(is_list(&[0xf8, 0x6c]));
/// assert!(!is_list(&[0x80]));
/// assert!(!is_list(&[]));
/// ```
#[must_use]
pub fn is_list(data: &[u8]) -> bool {
    data.first().is_some_and(|&b| b >= 0xc0)
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a single RLP byte string, which must span all of `data`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidRlp`] if the data is not valid RLP, encodes
/// a list, is truncated, or has bytes after the string.
///
/// # Example
///
/// ```
/// use txfield_chain::rlp::decode_bytes;
///
/// assert_eq!(decode_bytes(&[0x42]).unwrap(), vec![0x42]);
/// assert_eq!(decode_bytes(&[0x80]).unwrap(), Vec::<u8>::new());
/// assert_eq!(decode_bytes(&[0x83, 0x61, 0x62, 0x63]).unwrap(), b"abc".to_vec());
/// assert!(decode_bytes(&[0xc0]).is_err());
/// ```
pub fn decode_bytes(data: &[u8]) -> RlpResult<Vec<u8>> {
    let mut buf = data;
    let bytes = Header::decode_bytes(&mut buf, false)
        .map_err(|e| ParseError::invalid_rlp(format!("failed to decode bytes: {e}")))?;

    if !buf.is_empty() {
        return Err(ParseError::invalid_rlp(format!(
            "{} trailing bytes after string",
            buf.len()
        )));
    }

    Ok(bytes.to_vec())
}

/// Decode an RLP list, which must span all of `data`, into its raw items.
///
/// Each returned item is still RLP-encoded.
///
/// # Errors
///
/// Returns [`ParseError::InvalidRlp`] if the data is not valid RLP, encodes
/// a string, is truncated, or has bytes after the list.
///
/// # Example
///
/// ```
/// use txfield_chain::rlp::decode_list;
///
/// let items = decode_list(&[0xc2, 0x01, 0x02]).unwrap();
/// assert_eq!(items, vec![&[0x01u8][..], &[0x02u8][..]]);
///
/// assert!(decode_list(&[0xc2, 0x01, 0x02, 0x03]).is_err());
/// ```
pub fn decode_list(data: &[u8]) -> RlpResult<Vec<&[u8]>> {
    let mut buf = data;
    let payload = Header::decode_raw(&mut buf)
        .map_err(|e| ParseError::invalid_rlp(format!("failed to decode list: {e}")))?;

    if !buf.is_empty() {
        return Err(ParseError::invalid_rlp(format!(
            "{} trailing bytes after list",
            buf.len()
        )));
    }

    match payload {
        PayloadView::List(items) => Ok(items),
        PayloadView::String(_) => Err(ParseError::invalid_rlp("expected list, found string")),
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode byte strings as one RLP list.
///
/// # Example
///
/// ```
/// use txfield_chain::rlp::encode_list;
///
/// assert_eq!(encode_list::<Vec<u8>>(&[]), vec![0xc0]);
/// assert_eq!(encode_list(&[b"dog".to_vec()]), vec![0xc4, 0x83, b'd', b'o', b'g']);
/// ```
#[must_use]
pub fn encode_list<T: AsRef<[u8]>>(items: &[T]) -> Vec<u8> {
    let payload_length = items.iter().map(|item| item.as_ref().length()).sum();
    let header = Header {
        list: true,
        payload_length,
    };

    let mut out = Vec::with_capacity(header.length_with_payload());
    header.encode(&mut out);
    for item in items {
        item.as_ref().encode(&mut out);
    }
    out
}
