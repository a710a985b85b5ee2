//! Fuzz target for annotation JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the annotation parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use labelgen::labels::parse_annotation_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = parse_annotation_slice(data);
});
