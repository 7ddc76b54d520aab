#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    // Title extraction must never panic, and never yield an empty title
    if let Some(title) = archivist::title::title_from_content(&content) {
        assert!(!title.is_empty());
    }
});
