#![no_main]

use std::path::Path;

use archivist::MarkerBlock;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let markers = MarkerBlock::UPDATES;
        // Splicing must never panic; on success the markers survive
        if let Ok(out) = archivist::splice_text(text, &markers, "- entry\n", Path::new("fuzz.md")) {
            assert!(out.contains(markers.begin));
            assert!(out.contains(markers.end));
        }
    }
});
