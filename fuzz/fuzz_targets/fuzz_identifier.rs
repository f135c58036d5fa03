#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = std::str::from_utf8(data) {
        // Fuzz identifier parsing - this should never panic
        let _ = pinion::identifier::parse(key);
    }
});
