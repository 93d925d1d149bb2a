#![no_main]

use libfuzzer_sys::fuzz_target;
use widthrun::UintDecoder;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail cleanly, never panic or read
    // out of range.
    let Ok(mut dec) = UintDecoder::new(data) else {
        return;
    };
    for _ in 0..4096 {
        if dec.read().is_err() {
            break;
        }
    }
    assert!(dec.next_code() <= data.len());
});
