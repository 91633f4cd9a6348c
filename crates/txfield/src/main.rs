//! # `txfield`
//!
//! Canonical encoding of Ethereum transaction fields.
//!
//! ## Usage
//!
//! ```bash
//! # Lowercase an address
//! txfield address 0x52908400098527886E0F7030069857D2E4169EE7
//!
//! # Minimal hex and bytes of a quantity
//! txfield quantity 21000
//!
//! # Encode a JSON transaction as legacy RLP
//! txfield encode tx.json
//!
//! # Decode a legacy RLP transaction as JSON
//! txfield -f json decode 0xf86c...
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;
use txfield::cli::commands::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use txfield::cli::commands::{
    AddressCommand, AddressCommandError, ConfigCommand, ConfigCommandError, ConfigSource,
    DecodeCommand, DecodeCommandError, EncodeCommand, EncodeCommandError, QuantityCommand,
    QuantityCommandError,
};
use txfield::cli::output::OutputSettings;
use txfield::cli::{Cli, Commands};
use txfield::logging::{
    env_directives, init_logging, verbosity_to_level, LogConfig, LogError, LogGuard,
};
use txfield_core::Config;

/// Set up logging from the global flags.
///
/// `-v` wins over `RUST_LOG`, which wins over the default `warn` level.
///
/// # Errors
///
/// Returns [`LogError`] if logging initialization fails.
fn setup_logging(cli: &Cli) -> Result<LogGuard, LogError> {
    let config = LogConfig {
        level: verbosity_to_level(cli.verbose),
        format: cli.log_format.into(),
        file_path: cli.log_file.clone(),
        directives: if cli.verbose == 0 {
            env_directives()
        } else {
            None
        },
    };
    init_logging(&config)
}

/// Load the configuration for commands other than `config`.
///
/// # Errors
///
/// Returns the message to print if the source cannot be resolved or loaded.
fn load_config(source: &ConfigSource) -> Result<Config, String> {
    let config = source
        .load()
        .map_err(|e| format!("Configuration error: {e}"))?;
    tracing::debug!(path = %source.path().display(), format = %config.output.format, "loaded configuration");
    Ok(config)
}

/// Main entry point for the `txfield` application.
fn main() {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let source = match ConfigSource::resolve(cli.config.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let code = run(cli, source);
    if code != EXIT_SUCCESS {
        std::process::exit(code);
    }
}

/// Dispatch to the command handler and return the exit code.
fn run(cli: Cli, source: ConfigSource) -> i32 {
    if let Commands::Config { action } = cli.command {
        return report(
            ConfigCommand::new(action, source).run(),
            ConfigCommandError::exit_code,
        );
    }

    let config = match load_config(&source) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            return EXIT_ERROR;
        }
    };
    let output = OutputSettings::resolve(&config.output, cli.format);

    match cli.command {
        Commands::Address { input } => report(
            AddressCommand::new(input, output).run(),
            AddressCommandError::exit_code,
        ),
        Commands::Quantity { value } => report(
            QuantityCommand::new(value, config.input, output).run(),
            QuantityCommandError::exit_code,
        ),
        Commands::Encode { file, unsigned } => report(
            EncodeCommand::new(file, unsigned, config.input, output).run(),
            EncodeCommandError::exit_code,
        ),
        Commands::Decode { rlp_hex } => report(
            DecodeCommand::new(rlp_hex, output).run(),
            DecodeCommandError::exit_code,
        ),
        // Handled before the configuration is loaded.
        Commands::Config { .. } => EXIT_SUCCESS,
    }
}

/// Print a command error to stderr and map it to its exit code.
fn report<E: std::fmt::Display>(result: Result<(), E>, exit_code: impl Fn(&E) -> i32) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("Error: {e}");
            exit_code(&e)
        }
    }
}
