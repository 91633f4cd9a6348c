//! Validated transaction recipient addresses.
//!
//! An [`Address`] is either exactly 20 bytes or empty. The empty address is
//! the "no recipient" marker of a contract-creation transaction. No other
//! length can be represented, and no method mutates an existing value.
//!
//! # Examples
//!
//! ```
//! use txfield_core::Address;
//!
//! let address = Address::new("0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045").unwrap();
//! assert_eq!(address.to_string(), "0xd8da6bf26964af9d7eed9e03e53415d37aa96045");
//! assert_eq!(address.as_bytes().len(), 20);
//!
//! let creation = Address::new(Vec::<u8>::new()).unwrap();
//! assert!(creation.is_empty());
//! assert_eq!(creation.to_string(), "0x");
//!
//! assert!(Address::new(vec![0u8; 19]).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldError;
use crate::input::{AddressInput, ToBuffer};

/// Number of bytes in a non-empty address.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account or contract address, or the empty address.
///
/// `Display` renders lowercase hex with a `0x` prefix and no checksum casing.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Option<alloy_primitives::Address>);

impl Address {
    /// The empty address, used for contract creation.
    pub const EMPTY: Self = Self(None);

    /// Construct an address from raw bytes, a hex string or another address.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidEncoding`] if a hex string is malformed.
    /// Returns [`FieldError::InvalidLength`] if the bytes are neither 0 nor 20
    /// long.
    ///
    /// # Examples
    ///
    /// ```
    /// use txfield_core::Address;
    ///
    /// let a = Address::new([0x11u8; 20]).unwrap();
    /// let b = Address::new(a).unwrap();
    /// let c = Address::new("1111111111111111111111111111111111111111").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(b, c);
    /// ```
    pub fn new(source: impl Into<AddressInput>) -> Result<Self, FieldError> {
        let bytes = source.into().into_bytes()?;
        Self::from_slice(&bytes)
    }

    /// Construct an address from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidLength`] if `bytes` is neither 0 nor 20 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FieldError> {
        match bytes.len() {
            0 => Ok(Self::EMPTY),
            ADDRESS_LENGTH => Ok(Self(Some(alloy_primitives::Address::from_slice(bytes)))),
            other => Err(FieldError::address_length(other)),
        }
    }

    /// Construct an address from a hex string.
    ///
    /// # Errors
    ///
    /// See [`Address::new`].
    pub fn from_hex(s: &str) -> Result<Self, FieldError> {
        Self::new(s)
    }

    /// Returns `true` for the empty (contract creation) address.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the address bytes: 20 bytes, or none for the empty address.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Some(address) => address.as_slice(),
            None => &[],
        }
    }

    /// Returns an owned copy of the address bytes.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Returns the underlying 20-byte address, or `None` if empty.
    #[must_use]
    pub const fn inner(&self) -> Option<alloy_primitives::Address> {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = FieldError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<Vec<u8>> for Address {
    type Error = FieldError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&bytes)
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(address: alloy_primitives::Address) -> Self {
        Self(Some(address))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(Some(alloy_primitives::Address::from(bytes)))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ToBuffer for Address {
    fn to_buffer(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
