//! Code table derivation.
//!
//! A depth-first walk of the tree assigns each weighted leaf the bit path
//! that reaches it: 0 per left descent, 1 per right. The table is built once
//! per compression run and read-only during encoding; decoding never uses
//! it, the decoder walks the tree bit by bit instead.

use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::Node;

/// Per-symbol prefix codes derived from a Huffman tree.
pub struct CodeTable {
    codes: Vec<Vec<u8>>, // symbol -> bit sequence, empty when absent
}

impl CodeTable {
    /// Derive the code for every weighted leaf reachable from `root`.
    ///
    /// The zero-weight dummy sibling from the single-symbol case is skipped;
    /// it pads the tree shape but never encodes anything.
    pub fn derive(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); ALPHABET_SIZE];
        Self::walk(root, Vec::new(), &mut codes);
        Self { codes }
    }

    fn walk(node: &Node, path: Vec<u8>, codes: &mut [Vec<u8>]) {
        match node {
            Node::Leaf { symbol, weight } => {
                if *weight > 0 {
                    // A leaf at the root itself gets the single bit 0; the
                    // dummy-sibling rule keeps this path from occurring in
                    // trees built by `tree::build`.
                    codes[*symbol as usize] = if path.is_empty() { vec![0] } else { path };
                }
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push(0);
                Self::walk(left, left_path, codes);

                let mut right_path = path;
                right_path.push(1);
                Self::walk(right, right_path, codes);
            }
        }
    }

    /// Code bits for `symbol`; empty if the symbol never occurs.
    pub fn code(&self, symbol: u8) -> &[u8] {
        &self.codes[symbol as usize]
    }

    /// Exact payload size in bits for the given frequencies.
    ///
    /// The header precedes the payload on the wire, so this is computed
    /// before any bits are packed.
    pub fn total_bits(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .nonzero()
            .map(|(s, f)| f * self.codes[s as usize].len() as u64)
            .sum()
    }
}
