//! # Config Command
//!
//! Implementation of the `txfield config` command that displays, locates and
//! creates the configuration file.
//!
//! ## Usage
//!
//! ```text
//! txfield config                 # Display the effective configuration
//! txfield config path            # Show the configuration file path
//! txfield config init [--force]  # Write the default configuration
//! ```
//!
//! With `-c <PATH>` every action applies to that file instead of
//! `~/.txfield/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use txfield_core::config_loader::{expand_path, ConfigLoader};
use txfield_core::error::ConfigError;
use txfield_core::Config;

use crate::cli::args::ConfigAction;
use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_INVALID_INPUT};

// ============================================================================
// ConfigCommandError
// ============================================================================

/// Errors that can occur during config command execution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigCommandError {
    /// Loading or writing the configuration failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// `init` found an existing file and `--force` was not given.
    #[error("Configuration already exists at {path}. Use --force to overwrite.")]
    AlreadyExists {
        /// The existing file.
        path: String,
    },

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigCommandError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::ParseFailed { .. } | ConfigError::InvalidValue { .. }) => {
                EXIT_INVALID_INPUT
            }
            _ => EXIT_ERROR,
        }
    }
}

// ============================================================================
// ConfigSource
// ============================================================================

/// Where the configuration comes from for one invocation.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// `~/.txfield/config.toml` (or another base directory); optional.
    Default(ConfigLoader),
    /// A file named with `--config`; it must exist to be loaded.
    File(PathBuf),
}

impl ConfigSource {
    /// Pick the explicit file if one was given, else the default location.
    ///
    /// A leading `~` in `explicit` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if the home directory is
    /// needed but cannot be determined.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Ok(Self::File(expand_path(&path.to_string_lossy())?)),
            None => Ok(Self::Default(ConfigLoader::new()?)),
        }
    }

    /// The configuration file path.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        match self {
            Self::Default(loader) => loader.config_path(),
            Self::File(path) => path.clone(),
        }
    }

    /// Load the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] for a missing explicit file, and
    /// any read or parse error from [`ConfigLoader`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self {
            Self::Default(loader) => loader.load(),
            Self::File(path) => ConfigLoader::load_from(path),
        }
    }

    fn exists(&self) -> bool {
        match self {
            Self::Default(loader) => loader.exists(),
            Self::File(path) => path.exists(),
        }
    }

    fn write_default(&self) -> Result<(), ConfigError> {
        match self {
            Self::Default(loader) => loader.write_default(),
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        ConfigError::io(format!("failed to create {}", parent.display()), e)
                    })?;
                }
                fs::write(path, Config::default_toml()).map_err(|e| {
                    ConfigError::io(format!("failed to write {}", path.display()), e)
                })
            }
        }
    }
}

// ============================================================================
// ConfigCommand
// ============================================================================

/// The `txfield config` command handler.
///
/// # Example
///
/// ```no_run
/// use txfield::cli::args::ConfigAction;
/// use txfield::cli::commands::config::{ConfigCommand, ConfigSource};
///
/// let source = ConfigSource::resolve(None).expect("home directory");
/// let cmd = ConfigCommand::new(Some(ConfigAction::Path), source);
/// cmd.run().expect("config path failed");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigCommand {
    /// The action to perform (None = show config).
    pub action: Option<ConfigAction>,
    /// The configuration file the action applies to.
    pub source: ConfigSource,
}

impl ConfigCommand {
    /// Create a new `ConfigCommand`.
    #[must_use]
    pub const fn new(action: Option<ConfigAction>, source: ConfigSource) -> Self {
        Self { action, source }
    }

    /// Perform the action and return what should be printed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be loaded or parsed
    /// - `init` would overwrite a file without `--force`
    /// - The default configuration cannot be written
    pub fn render(&self) -> Result<String, ConfigCommandError> {
        match self.action {
            None => self.show_config(),
            Some(ConfigAction::Path) => Ok(self.source.path().display().to_string()),
            Some(ConfigAction::Init { force }) => self.init_config(force),
        }
    }

    /// Run the command, printing the result to stdout.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn run(&self) -> Result<(), ConfigCommandError> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn show_config(&self) -> Result<String, ConfigCommandError> {
        let config = self.source.load()?;
        Ok(toml::to_string_pretty(&config)?.trim_end().to_string())
    }

    fn init_config(&self, force: bool) -> Result<String, ConfigCommandError> {
        let path = self.source.path();
        if self.source.exists() && !force {
            return Err(ConfigCommandError::AlreadyExists {
                path: path.display().to_string(),
            });
        }

        self.source.write_default()?;
        tracing::info!(path = %path.display(), force, "wrote default configuration");
        Ok(format!("Wrote default configuration to {}", path.display()))
    }
}

// ============================================================================
// Tests
// ============================================================================
