//! Rendering of command results.
//!
//! Commands build a small serializable struct and hand it to
//! [`OutputSettings`], which either prints bare hex lines or JSON.

use serde::Serialize;
use txfield_core::{OutputConfig, OutputFormat};

use crate::cli::args::FormatArg;

/// The resolved output format for one invocation.
///
/// `--format` on the command line wins over `output.format` from the
/// config file. `output.pretty` only affects JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    /// Hex lines or a JSON document.
    pub format: OutputFormat,
    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self::resolve(&OutputConfig::default(), None)
    }
}

impl OutputSettings {
    /// Combine the configured output section with a command-line override.
    #[must_use]
    pub fn resolve(config: &OutputConfig, format_override: Option<FormatArg>) -> Self {
        Self {
            format: format_override.map_or(config.format, OutputFormat::from),
            pretty: config.pretty,
        }
    }

    /// Whether results should be rendered as JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Serialize a result document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `value` cannot be serialized.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

/// Format bytes as `0x`-prefixed lowercase hex.
#[must_use]
pub fn format_hex_output(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
