//! End-to-end tests that run the compiled `txfield` binary.

pub mod binary_test;
