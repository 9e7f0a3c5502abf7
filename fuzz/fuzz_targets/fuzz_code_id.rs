//! Fuzz target: the `[A-Za-z0-9-]+` id check.
//!
//! Accepted strings must be non-empty and round-trip through `CodeId`.

#![no_main]

use codigos_core::{is_valid_code_id, CodeId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match CodeId::parse(s) {
            Ok(id) => {
                assert!(is_valid_code_id(s));
                assert_eq!(id.as_str(), s);
            }
            Err(_) => assert!(!is_valid_code_id(s)),
        }
    }
});
