use huff::code::CodeTable;
use huff::freq::FrequencyTable;
use huff::{compress, decompress, tree, CompressionStats};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 0..4096)) {
        let container = compress(&input);
        let output = decompress(&container).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_roundtrip_small_alphabet(input in prop::collection::vec(0u8..4, 0..512)) {
        let container = compress(&input);
        let output = decompress(&container).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_codes_are_prefix_free(input in prop::collection::vec(any::<u8>(), 1..1024)) {
        let freqs = FrequencyTable::count(&input);
        let root = tree::build(&freqs).unwrap();
        let codes = CodeTable::derive(&root);

        let present: Vec<&[u8]> = freqs.nonzero().map(|(s, _)| codes.code(s)).collect();
        for (i, a) in present.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in present.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a));
                }
            }
        }
    }

    #[test]
    fn test_code_length_within_one_bit_of_entropy(
        input in prop::collection::vec(any::<u8>(), 2..2048),
    ) {
        let freqs = FrequencyTable::count(&input);
        prop_assume!(freqs.unique_symbols() >= 2);

        let container = compress(&input);
        let stats = CompressionStats::measure(&input, container.len() as u64).unwrap();
        prop_assert!(stats.entropy <= stats.avg_code_length + 1e-9);
        prop_assert!(stats.avg_code_length < stats.entropy + 1.0);
    }

    #[test]
    fn test_truncated_container_never_panics(
        input in prop::collection::vec(any::<u8>(), 0..256),
        keep in any::<prop::sample::Index>(),
    ) {
        let container = compress(&input);
        let cut = keep.index(container.len() + 1);
        // Either a clean parse of a still-valid prefix or a Format error;
        // anything but a panic.
        let _ = decompress(&container[..cut]);
    }

    #[test]
    fn test_garbage_input_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decompress(&data);
    }
}
