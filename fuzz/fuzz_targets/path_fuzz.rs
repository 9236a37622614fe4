//! Fuzz test for dotted column path parsing
//!
//! This fuzz target feeds arbitrary strings to the path parser to find:
//! - Panics or crashes
//! - Paths with empty segments slipping through
//! - Display output that does not parse back to the same path
//!
//! Run with: cargo +nightly fuzz run path_fuzz -- -max_total_time=60

#![no_main]

use colsel_core::ColumnPath;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match ColumnPath::parse(input) {
            Ok(path) => {
                // A parsed path is never empty and never has empty segments
                assert!(!path.is_empty(), "Parsed path should have at least one segment");
                assert!(
                    path.segments().iter().all(|s| !s.is_empty()),
                    "Parsed path should not contain empty segments"
                );

                // Rendering with the same separator reproduces the input
                assert_eq!(path.to_string(), input);
            }
            Err(_) => {
                // Rejected input must actually be malformed
                assert!(
                    input.is_empty() || input.split('.').any(|s| s.is_empty()),
                    "Well-formed path was rejected: {:?}",
                    input
                );
            }
        }
    }
});
