//! Error types for the `txfield` workspace.
//!
//! Errors are grouped by the layer that raises them:
//!
//! - [`FieldError`] - Canonicalization and validation of individual field values
//! - [`ParseError`] - Decoding of RLP-encoded transactions
//! - [`ConfigError`] - Loading and validating configuration
//!
//! Each layer has its own enum; [`ParseError`] wraps [`FieldError`] because a
//! decoded item is canonicalized like any other field value.
//!
//! # Example
//!
//! ```rust
//! use txfield_core::error::FieldError;
//!
//! fn check(len: usize) -> Result<(), FieldError> {
//!     if len != 0 && len != 20 {
//!         return Err(FieldError::address_length(len));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(20).is_ok());
//! assert!(check(19).is_err());
//! ```

// ============================================================================
// FieldError
// ============================================================================

/// Errors raised while canonicalizing a single transaction field.
///
/// These are contract violations by the caller, never transient conditions:
/// nothing in this crate retries or substitutes a default after one is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A byte sequence has a length the target type does not accept.
    #[error("invalid length: {context}")]
    InvalidLength {
        /// Which lengths were accepted and which was found.
        context: String,
    },

    /// A hex string or byte encoding is malformed or not canonical.
    #[error("invalid encoding: {context}")]
    InvalidEncoding {
        /// What was wrong with the encoding.
        context: String,
    },

    /// A numeric value is outside the accepted domain.
    #[error("invalid value: {context}")]
    InvalidValue {
        /// Why the value was rejected.
        context: String,
    },
}

impl FieldError {
    /// Create an `InvalidLength` error with context.
    #[must_use]
    pub fn invalid_length(context: impl Into<String>) -> Self {
        Self::InvalidLength {
            context: context.into(),
        }
    }

    /// Create the `InvalidLength` error raised for an address of `actual` bytes.
    #[must_use]
    pub fn address_length(actual: usize) -> Self {
        Self::invalid_length(format!(
            "address must be 20 bytes in length or be empty, got {actual} bytes"
        ))
    }

    /// Create an `InvalidEncoding` error with context.
    #[must_use]
    pub fn invalid_encoding(context: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context: context.into(),
        }
    }

    /// Create an `InvalidValue` error with context.
    #[must_use]
    pub fn invalid_value(context: impl Into<String>) -> Self {
        Self::InvalidValue {
            context: context.into(),
        }
    }

    /// Prefix the context with the name of the transaction field it concerns.
    ///
    /// # Examples
    ///
    /// ```
    /// use txfield_core::error::FieldError;
    ///
    /// let err = FieldError::invalid_value("negative").for_field("nonce");
    /// assert_eq!(err.to_string(), "invalid value: nonce: negative");
    /// ```
    #[must_use]
    pub fn for_field(self, field: &str) -> Self {
        match self {
            Self::InvalidLength { context } => Self::InvalidLength {
                context: format!("{field}: {context}"),
            },
            Self::InvalidEncoding { context } => Self::InvalidEncoding {
                context: format!("{field}: {context}"),
            },
            Self::InvalidValue { context } => Self::InvalidValue {
                context: format!("{field}: {context}"),
            },
        }
    }

    /// Returns the context message without the variant prefix.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::InvalidLength { context }
            | Self::InvalidEncoding { context }
            | Self::InvalidValue { context } => context,
        }
    }
}

// ============================================================================
// ParseError
// ============================================================================

/// Errors that can occur while decoding an RLP-encoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// RLP framing is invalid.
    #[error("RLP decoding failed: {context}")]
    InvalidRlp {
        /// Context about what was being decoded.
        context: String,
    },

    /// The RLP is well formed but does not describe a transaction.
    #[error("malformed transaction: {context}")]
    MalformedTransaction {
        /// Context about what was malformed.
        context: String,
    },

    /// A decoded field value failed canonical validation.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ParseError {
    /// Create an `InvalidRlp` error with context.
    #[must_use]
    pub fn invalid_rlp(context: impl Into<String>) -> Self {
        Self::InvalidRlp {
            context: context.into(),
        }
    }

    /// Create a `MalformedTransaction` error with context.
    #[must_use]
    pub fn malformed_transaction(context: impl Into<String>) -> Self {
        Self::MalformedTransaction {
            context: context.into(),
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Failed to parse or serialize the configuration file.
    #[error("failed to parse configuration: {context}")]
    ParseFailed {
        /// Context about the parsing failure.
        context: String,
    },

    /// A configuration value is invalid.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The field name with the invalid value.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// Reading or writing the configuration failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Create a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a `ParseFailed` error.
    #[must_use]
    pub fn parse_failed(context: impl Into<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
        }
    }

    /// Create an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an `Io` error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a `NoHomeDirectory` error.
    #[must_use]
    pub const fn no_home_directory() -> Self {
        Self::NoHomeDirectory
    }
}
