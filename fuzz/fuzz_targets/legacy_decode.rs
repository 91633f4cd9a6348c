//! Fuzz target for the legacy transaction decoder.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run legacy_decode
//! ```
//!
//! Accepted inputs must be canonical: re-encoding a decoded signed
//! transaction reproduces the input exactly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use txfield_chain::legacy;

fuzz_target!(|data: &[u8]| {
    if let Ok(tx) = legacy::decode(data) {
        if tx.is_signed() {
            assert_eq!(legacy::encode(&tx), data);
        }
        let _ = legacy::decode(&legacy::encode_unsigned(&tx));
        let _ = tx.to_json();
    }
});
