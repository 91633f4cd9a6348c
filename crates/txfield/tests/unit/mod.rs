//! Tests that drive the command handlers through the library.

pub mod cli_integration_test;
pub mod error_handling_test;
