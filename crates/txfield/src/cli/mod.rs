//! # CLI Module
//!
//! Command-line interface for `txfield`.
//!
//! ## Module Structure
//!
//! - [`args`] - Argument parsing and CLI structure definitions
//! - [`commands`] - Command handler implementations
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use txfield::cli::{Cli, Commands};
//!
//! let cli = Cli::parse();
//!
//! match cli.command {
//!     Commands::Address { input } => {
//!         // Handle address command
//!     }
//!     Commands::Decode { rlp_hex } => {
//!         // Handle decode command
//!     }
//!     _ => {}
//! }
//! ```

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Commands, ConfigAction, FormatArg, LogFormatArg};
