use huff::{compress, decompress};

fn main() {
    // Skewed distribution: 'e' dominates, tail of rarer letters.
    let input: Vec<u8> = (0..100_000)
        .map(|i| match i % 16 {
            0..=7 => b'e',
            8..=11 => b't',
            12..=13 => b'a',
            14 => b'o',
            _ => b'z',
        })
        .collect();

    for _ in 0..1000 {
        let container = compress(&input);
        let output = decompress(&container).unwrap();
        assert_eq!(input, output);
    }
}
