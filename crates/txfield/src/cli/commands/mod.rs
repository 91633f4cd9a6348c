//! # Command Handlers
//!
//! One module per subcommand. Each handler is built from parsed arguments,
//! renders its result with [`render`](AddressCommand::render) and prints it
//! with `run`. Every handler has its own error type carrying an
//! `exit_code()`.
//!
//! - [`address`] - `txfield address`
//! - [`quantity`] - `txfield quantity`
//! - [`encode`] - `txfield encode`
//! - [`decode`] - `txfield decode`
//! - [`config`] - `txfield config`

pub mod address;
pub mod config;
pub mod decode;
pub mod encode;
pub mod exit_codes;
pub mod quantity;

pub use address::{AddressCommand, AddressCommandError};
pub use config::{ConfigCommand, ConfigCommandError, ConfigSource};
pub use decode::{DecodeCommand, DecodeCommandError};
pub use encode::{EncodeCommand, EncodeCommandError};
pub use quantity::{QuantityCommand, QuantityCommandError};
