//! Compression measurements.
//!
//! Shannon entropy of the input distribution, the frequency-weighted mean
//! code length, and how the container size compares to the original.
//! Presentation is left entirely to callers.

use crate::code::CodeTable;
use crate::freq::FrequencyTable;
use crate::tree;

/// Summary measurements for one compression run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Shannon entropy of the input's empirical byte distribution, bits/symbol.
    pub entropy: f64,
    /// Frequency-weighted mean code length, bits/symbol.
    pub avg_code_length: f64,
    /// `entropy / avg_code_length`. 1.0 means the code meets the entropy
    /// bound exactly; a single-symbol input has entropy 0 and efficiency 0.
    pub efficiency: f64,
    /// Container size over input size, both in bytes.
    pub compression_ratio: f64,
    /// Input length in bytes.
    pub original_bytes: u64,
    /// Container length in bytes.
    pub compressed_bytes: u64,
}

impl CompressionStats {
    /// Measure `input` against the size of its compressed container.
    ///
    /// Returns `None` for empty input, which has no distribution to measure.
    pub fn measure(input: &[u8], compressed_bytes: u64) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        let freqs = FrequencyTable::count(input);
        let root = tree::build(&freqs)?;
        let codes = CodeTable::derive(&root);

        let total = freqs.total() as f64;
        let mut entropy = 0.0;
        let mut avg_code_length = 0.0;
        for (symbol, freq) in freqs.nonzero() {
            let p = freq as f64 / total;
            entropy -= p * p.log2();
            avg_code_length += p * codes.code(symbol).len() as f64;
        }

        let efficiency = if entropy > 0.0 {
            entropy / avg_code_length
        } else {
            0.0
        };

        Some(Self {
            entropy,
            avg_code_length,
            efficiency,
            compression_ratio: compressed_bytes as f64 / input.len() as f64,
            original_bytes: input.len() as u64,
            compressed_bytes,
        })
    }
}
