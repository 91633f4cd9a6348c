//! The legacy transaction field aggregate.
//!
//! - [`TxData`] - loosely typed builder; each field accepts any of the input
//!   shapes from [`crate::input`]
//! - [`TxFields`] - canonical, immutable field values produced from a `TxData`
//! - [`JsonTx`] - string form of the fields for JSON documents
//!
//! # Examples
//!
//! ```
//! use txfield_core::types::TxData;
//!
//! let tx = TxData::new()
//!     .nonce(9u64)
//!     .gas_price("20000000000")
//!     .gas_limit("0x5208")
//!     .to("0x3535353535353535353535353535353535353535")
//!     .value("1000000000000000000")
//!     .normalize()
//!     .unwrap();
//!
//! assert!(!tx.is_signed());
//! assert!(!tx.is_contract_creation());
//!
//! let json = tx.to_json();
//! assert_eq!(json.gas_limit.as_deref(), Some("0x5208"));
//! assert_eq!(json.value.as_deref(), Some("0xde0b6b3a7640000"));
//! ```

use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::config::InputConfig;
use crate::error::FieldError;
use crate::input::{AddressInput, BytesInput, NumericInput};
use crate::numeric::{format_quantity, to_minimal_bytes};

/// Field names in serialization order, as used in JSON documents.
pub const FIELD_NAMES: [&str; 9] = [
    "nonce", "gasPrice", "gasLimit", "to", "value", "data", "v", "r", "s",
];

/// Number of fields in an unsigned legacy transaction.
pub const UNSIGNED_FIELD_COUNT: usize = 6;

// ============================================================================
// TxData
// ============================================================================

/// Loosely typed transaction fields, prior to validation.
///
/// Every field is optional. Nothing is checked until [`normalize`](Self::normalize).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxData {
    nonce: Option<NumericInput>,
    gas_price: Option<NumericInput>,
    gas_limit: Option<NumericInput>,
    to: Option<AddressInput>,
    value: Option<NumericInput>,
    data: Option<BytesInput>,
    v: Option<NumericInput>,
    r: Option<NumericInput>,
    s: Option<NumericInput>,
}

impl TxData {
    /// Creates an empty set of fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nonce.
    #[must_use]
    pub fn nonce(mut self, nonce: impl Into<NumericInput>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sets the gas price.
    #[must_use]
    pub fn gas_price(mut self, gas_price: impl Into<NumericInput>) -> Self {
        self.gas_price = Some(gas_price.into());
        self
    }

    /// Sets the gas limit.
    #[must_use]
    pub fn gas_limit(mut self, gas_limit: impl Into<NumericInput>) -> Self {
        self.gas_limit = Some(gas_limit.into());
        self
    }

    /// Sets the recipient. An empty address means contract creation.
    ///
    /// An empty input (`""`, `"0x"` or no bytes) normalizes to an absent
    /// recipient, so [`TxFields::to`] returns `None` exactly as if `to` had
    /// never been set.
    #[must_use]
    pub fn to(mut self, to: impl Into<AddressInput>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Sets the transferred value.
    #[must_use]
    pub fn value(mut self, value: impl Into<NumericInput>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the call data.
    #[must_use]
    pub fn data(mut self, data: impl Into<BytesInput>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the recovery value `v`.
    #[must_use]
    pub fn v(mut self, v: impl Into<NumericInput>) -> Self {
        self.v = Some(v.into());
        self
    }

    /// Sets the signature component `r`.
    #[must_use]
    pub fn r(mut self, r: impl Into<NumericInput>) -> Self {
        self.r = Some(r.into());
        self
    }

    /// Sets the signature component `s`.
    #[must_use]
    pub fn s(mut self, s: impl Into<NumericInput>) -> Self {
        self.s = Some(s.into());
        self
    }

    /// Validates every field with the default [`InputConfig`].
    ///
    /// # Errors
    ///
    /// See [`normalize_with`](Self::normalize_with).
    pub fn normalize(self) -> Result<TxFields, FieldError> {
        self.normalize_with(&InputConfig::default())
    }

    /// Validates every field and produces the canonical aggregate.
    ///
    /// Fields are checked in serialization order and the first failure is
    /// returned, with the field name prefixed to its context.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] of the first field that fails to normalize.
    pub fn normalize_with(self, config: &InputConfig) -> Result<TxFields, FieldError> {
        let numeric = |input: Option<NumericInput>, field: &str| {
            input
                .map(|i| i.into_u256_with(config))
                .transpose()
                .map_err(|e| e.for_field(field))
        };

        let nonce = numeric(self.nonce, "nonce")?;
        let gas_price = numeric(self.gas_price, "gasPrice")?;
        let gas_limit = numeric(self.gas_limit, "gasLimit")?;

        let to = match self.to {
            Some(input) => {
                let address = Address::new(input).map_err(|e| e.for_field("to"))?;
                (!address.is_empty()).then_some(address)
            }
            None => None,
        };

        let value = numeric(self.value, "value")?;

        let data = match self.data {
            Some(input) => Bytes::from(input.into_bytes().map_err(|e| e.for_field("data"))?),
            None => Bytes::new(),
        };

        let v = numeric(self.v, "v")?;
        let r = numeric(self.r, "r")?;
        let s = numeric(self.s, "s")?;

        Ok(TxFields {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            v,
            r,
            s,
        })
    }
}

impl From<&JsonTx> for TxData {
    fn from(json: &JsonTx) -> Self {
        let numeric = |s: Option<&String>| s.cloned().map(NumericInput::Text);

        Self {
            nonce: numeric(json.nonce.as_ref()),
            gas_price: numeric(json.gas_price.as_ref()),
            gas_limit: numeric(json.gas_limit.as_ref()),
            to: json.to.clone().map(AddressInput::Hex),
            value: numeric(json.value.as_ref()),
            data: json.data.clone().map(BytesInput::Hex),
            v: numeric(json.v.as_ref()),
            r: numeric(json.r.as_ref()),
            s: numeric(json.s.as_ref()),
        }
    }
}

// ============================================================================
// TxFields
// ============================================================================

/// Canonical legacy transaction fields.
///
/// Numeric fields keep the difference between "set to zero" and "omitted";
/// both serialize to the empty byte string. A recipient is either a full
/// 20-byte address or `None` for contract creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TxFields {
    nonce: Option<U256>,
    gas_price: Option<U256>,
    gas_limit: Option<U256>,
    to: Option<Address>,
    value: Option<U256>,
    data: Bytes,
    v: Option<U256>,
    r: Option<U256>,
    s: Option<U256>,
}

impl TxFields {
    /// Returns the nonce.
    #[must_use]
    pub const fn nonce(&self) -> Option<U256> {
        self.nonce
    }

    /// Returns the gas price.
    #[must_use]
    pub const fn gas_price(&self) -> Option<U256> {
        self.gas_price
    }

    /// Returns the gas limit.
    #[must_use]
    pub const fn gas_limit(&self) -> Option<U256> {
        self.gas_limit
    }

    /// Returns the recipient, `None` for contract creation.
    #[must_use]
    pub const fn to(&self) -> Option<Address> {
        self.to
    }

    /// Returns the transferred value.
    #[must_use]
    pub const fn value(&self) -> Option<U256> {
        self.value
    }

    /// Returns the call data.
    #[must_use]
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the recovery value.
    #[must_use]
    pub const fn v(&self) -> Option<U256> {
        self.v
    }

    /// Returns the signature component `r`.
    #[must_use]
    pub const fn r(&self) -> Option<U256> {
        self.r
    }

    /// Returns the signature component `s`.
    #[must_use]
    pub const fn s(&self) -> Option<U256> {
        self.s
    }

    /// Returns `true` if `v`, `r` and `s` are all present.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.v.is_some() && self.r.is_some() && self.s.is_some()
    }

    /// Returns `true` if there is no recipient.
    #[must_use]
    pub const fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Returns the nine serialized field values in [`FIELD_NAMES`] order.
    ///
    /// Numeric fields use their minimal big-endian encoding, and absent
    /// fields are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use txfield_core::types::TxData;
    ///
    /// let tx = TxData::new().nonce(0u8).gas_limit(21_000u32).normalize().unwrap();
    /// let raw = tx.raw();
    /// assert!(raw[0].is_empty());
    /// assert_eq!(raw[2], vec![0x52, 0x08]);
    /// assert!(raw[3].is_empty());
    /// ```
    #[must_use]
    pub fn raw(&self) -> [Vec<u8>; 9] {
        [
            to_minimal_bytes(self.nonce),
            to_minimal_bytes(self.gas_price),
            to_minimal_bytes(self.gas_limit),
            self.to.map_or_else(Vec::new, |to| to.to_vec()),
            to_minimal_bytes(self.value),
            self.data.to_vec(),
            to_minimal_bytes(self.v),
            to_minimal_bytes(self.r),
            to_minimal_bytes(self.s),
        ]
    }

    /// Converts to the JSON string form.
    ///
    /// Absent fields are left out; `data` is always present.
    #[must_use]
    pub fn to_json(&self) -> JsonTx {
        JsonTx {
            nonce: self.nonce.map(format_quantity),
            gas_price: self.gas_price.map(format_quantity),
            gas_limit: self.gas_limit.map(format_quantity),
            to: self.to.map(|to| to.to_string()),
            value: self.value.map(format_quantity),
            data: Some(format!("0x{}", hex::encode(&self.data))),
            v: self.v.map(format_quantity),
            r: self.r.map(format_quantity),
            s: self.s.map(format_quantity),
        }
    }

    /// Parses a JSON document's fields under a specific [`InputConfig`].
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] of the first invalid field.
    pub fn from_json_with(json: &JsonTx, config: &InputConfig) -> Result<Self, FieldError> {
        TxData::from(json).normalize_with(config)
    }
}

impl TryFrom<TxData> for TxFields {
    type Error = FieldError;

    fn try_from(data: TxData) -> Result<Self, Self::Error> {
        data.normalize()
    }
}

impl TryFrom<&JsonTx> for TxFields {
    type Error = FieldError;

    fn try_from(json: &JsonTx) -> Result<Self, Self::Error> {
        TxData::from(json).normalize()
    }
}

// ============================================================================
// JsonTx
// ============================================================================

/// Transaction fields as JSON strings.
///
/// Numbers are `0x` hex quantities, `to` and `data` are `0x` hex bytes.
///
/// # Examples
///
/// ```
/// use txfield_core::types::JsonTx;
///
/// let json: JsonTx = serde_json::from_str(r#"{"nonce":"0x1","gasPrice":"0x2"}"#).unwrap();
/// assert_eq!(json.gas_price.as_deref(), Some("0x2"));
/// assert_eq!(serde_json::to_string(&json).unwrap(), r#"{"nonce":"0x1","gasPrice":"0x2"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTx {
    /// Sender nonce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Price per unit of gas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    /// Maximum gas to spend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    /// Recipient address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Transferred value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Recovery value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<String>,
    /// Signature `r`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    /// Signature `s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}
