#![no_main]

use libfuzzer_sys::fuzz_target;
use widthrun::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    // Bytes are interpreted as (value: u32, shift: u8) tuples; the shift
    // spreads inputs across every field width from 0 to 32 bits.
    let mut values = Vec::new();
    for chunk in data.chunks(5) {
        if chunk.len() < 5 {
            break;
        }
        let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        values.push(value >> (chunk[4] % 32));
    }
    if values.is_empty() {
        return;
    }

    let code = compress(&values);
    let decoded = decompress(&code, values.len()).expect("own output must decode");
    assert_eq!(decoded, values, "roundtrip mismatch");
});
