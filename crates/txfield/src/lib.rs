//! # txfield Library
//!
//! Command-line front end for canonical Ethereum transaction fields.
//!
//! The library exports the CLI module so argument parsing and command
//! handlers can be driven and tested without spawning the binary.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and handlers
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use txfield::cli::{Cli, Commands};
//!
//! let cli = Cli::parse();
//! println!("Verbose level: {}", cli.verbose);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;

// Re-export key logging types for convenience
pub use logging::{
    build_filter, env_directives, init_logging, verbosity_to_level, LogConfig, LogError,
    LogFormat, LogGuard, LogLevel,
};
