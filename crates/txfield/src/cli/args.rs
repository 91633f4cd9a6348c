//! # CLI Argument Definitions
//!
//! Command-line structure for `txfield`, built with clap derive macros.
//!
//! - `txfield address <INPUT>` - Canonicalize an address
//! - `txfield quantity <VALUE>` - Canonicalize a numeric quantity
//! - `txfield encode <FILE|->` - Encode a JSON transaction as legacy RLP
//! - `txfield decode <RLP_HEX>` - Decode a legacy RLP transaction
//! - `txfield config [path|init]` - Show, locate or create configuration
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `-c, --config <PATH>` - Path to configuration file
//! - `-f, --format <hex|json>` - Override the configured output format
//! - `--log-format <pretty|json|compact>` - Log line format on stderr
//! - `--log-file <PATH>` - Also write logs to a file

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;

/// Canonical encoding of Ethereum transaction fields.
#[derive(Debug, Parser)]
#[command(name = "txfield")]
#[command(
    author,
    version,
    about = "Canonical encoding of Ethereum transaction fields"
)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// Can be specified multiple times to increase verbosity level:
    /// - `-v` - Show info messages
    /// - `-vv` - Show debug messages
    /// - `-vvv` - Show trace messages
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    ///
    /// If not specified, `~/.txfield/config.toml` is used when present.
    /// A leading `~` is expanded. An explicit file must exist.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overriding `output.format` from the config file
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Format of log lines written to stderr
    #[arg(long, global = true, default_value = "compact", value_name = "FORMAT")]
    pub log_format: LogFormatArg,

    /// Also append log lines to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Canonicalize an address
    ///
    /// Accepts 20 bytes of hex in any case, with or without `0x`.
    /// An empty input (`""` or `0x`) is the empty address.
    Address {
        /// Address hex
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
    },

    /// Canonicalize a numeric quantity
    ///
    /// Prints the shortest `0x` hex form and the minimal big-endian bytes.
    Quantity {
        /// Decimal digits or `0x` hex
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Encode a JSON transaction as legacy RLP
    ///
    /// Reads an object with optional string fields `nonce`, `gasPrice`,
    /// `gasLimit`, `to`, `value`, `data`, `v`, `r` and `s`.
    Encode {
        /// JSON file, or `-` for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,

        /// Encode only the six unsigned fields and print the signing hash
        #[arg(short, long)]
        unsigned: bool,
    },

    /// Decode a legacy RLP transaction
    Decode {
        /// Raw transaction hex (with or without 0x prefix)
        #[arg(value_name = "RLP_HEX")]
        rlp_hex: String,
    },

    /// View or create configuration
    ///
    /// Without a subcommand, displays the effective configuration.
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Configuration subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Bare hex strings, one per line
    Hex,

    /// JSON object
    Json,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl From<FormatArg> for txfield_core::OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Hex => Self::Hex,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Log line format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Multi-line human-readable output
    Pretty,

    /// One JSON object per line
    Json,

    /// Single-line human-readable output
    #[default]
    Compact,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Compact => Self::Compact,
        }
    }
}
