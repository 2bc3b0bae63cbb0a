#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing must never panic, valid or not
        let _ = rental_core::config::parse_with_warnings(s, Path::new("fuzz.toml"));
    }
});
