//! Configuration types for `txfield`.
//!
//! Configuration is stored in TOML format at `~/.txfield/config.toml`. Every
//! section is optional; missing values fall back to their defaults.
//!
//! # Examples
//!
//! ```
//! use txfield_core::config::{Config, OutputFormat};
//!
//! let config = Config::default();
//! assert!(config.input.decimal_strings);
//! assert_eq!(config.output.format, OutputFormat::Hex);
//!
//! let toml_str = Config::default_toml();
//! let parsed: Config = toml::from_str(&toml_str).expect("valid TOML");
//! assert_eq!(parsed, config);
//! ```
//!
//! # Default TOML Output
//!
//! ```toml
//! [input]
//! decimal_strings = true
//!
//! [output]
//! format = "hex"
//! pretty = true
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Top-level configuration.
///
/// - **Input**: which loose numeric forms are accepted
/// - **Output**: how command results are rendered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Input coercion settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Output rendering settings.
    #[serde(default)]
    pub output: OutputConfig,
}

const fn default_true() -> bool {
    true
}

/// Settings for normalizing loose numeric input.
///
/// # Examples
///
/// ```
/// use txfield_core::config::InputConfig;
/// use txfield_core::input::NumericInput;
///
/// let strict = InputConfig { decimal_strings: false };
/// assert!(NumericInput::from("100").into_u256_with(&strict).is_err());
/// assert!(NumericInput::from("0x64").into_u256_with(&strict).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Accept unprefixed decimal strings for numeric fields.
    ///
    /// When disabled, numeric strings must be `0x`-prefixed hex quantities.
    #[serde(default = "default_true")]
    pub decimal_strings: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            decimal_strings: true,
        }
    }
}

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare hex strings, one per line.
    #[default]
    Hex,
    /// A JSON document.
    Json,
}

impl OutputFormat {
    /// Returns the string representation of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid_value("output.format", other)),
        }
    }
}

/// Settings for rendering command output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default output format when none is given on the command line.
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Hex,
            pretty: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the default configuration as a commented TOML string.
    ///
    /// # Examples
    ///
    /// ```
    /// use txfield_core::config::Config;
    ///
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[input]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    #[must_use]
    pub fn default_toml() -> String {
        r#"[input]
# Accept decimal strings such as "21000" for numeric fields.
# When false, numeric strings must be 0x-prefixed hex.
decimal_strings = true

[output]
# "hex" or "json"
format = "hex"
pretty = true
"#
        .to_string()
    }

    /// Creates a configuration builder for customizing values.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for creating customized [`Config`] instances.
///
/// # Examples
///
/// ```
/// use txfield_core::config::{ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .decimal_strings(false)
///     .output_format(OutputFormat::Json)
///     .pretty(false)
///     .build();
///
/// assert!(!config.input.decimal_strings);
/// assert_eq!(config.output.format, OutputFormat::Json);
/// assert!(!config.output.pretty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a builder seeded with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether decimal strings are accepted for numeric fields.
    #[must_use]
    pub const fn decimal_strings(mut self, enabled: bool) -> Self {
        self.config.input.decimal_strings = enabled;
        self
    }

    /// Sets the default output format.
    #[must_use]
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Sets whether JSON output is pretty-printed.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> Config {
        self.config
    }
}
