#![no_main]
use huff::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Round-trip: every input must come back exactly.
    let container = compress(data);
    let output = decompress(&container).expect("own container must decode");
    assert_eq!(data, output.as_slice());

    // The input reinterpreted as a container must parse or fail cleanly,
    // never panic.
    let _ = decompress(data);
});
