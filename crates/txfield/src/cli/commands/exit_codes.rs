//! Exit code constants for CLI commands.

/// Successful operation.
pub const EXIT_SUCCESS: i32 = 0;

/// The input could not be canonicalized or decoded.
///
/// Bad hex, wrong address length, negative or oversized quantities,
/// malformed RLP and invalid JSON transactions all end here.
pub const EXIT_INVALID_INPUT: i32 = 1;

/// General error (configuration, I/O, logging setup, etc.).
pub const EXIT_ERROR: i32 = 2;
