//! # Canonical Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies, in a self-describing container.*
//!
//! ## Intuition First
//!
//! Imagine abbreviating words in a notebook. Words you write constantly get
//! one-letter shorthand; rare words keep their full spelling. As long as no
//! abbreviation is the beginning of another, you can read the notebook back
//! without ambiguity or separators.
//!
//! Huffman coding does exactly this for bytes. It counts how often each byte
//! occurs, then grows a binary tree bottom-up by repeatedly merging the two
//! rarest subtrees. The path from the root to each leaf — 0 for left, 1 for
//! right — becomes that byte's code: frequent bytes end up near the root with
//! short codes, rare bytes sink deeper. Because every symbol lives at a leaf,
//! no code can be a prefix of another.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1952  Huffman     Optimal prefix codes via greedy bottom-up merging
//! 1976  Rissanen    Arithmetic coding: closes the fractional-bit gap
//! 1987  Witten      Practical arithmetic coding implementations
//! 1996  Deflate     Huffman over LZ77 becomes the web's workhorse (RFC 1951)
//! 2007  Duda        ANS: arithmetic-coding rates at Huffman speed
//! ```
//!
//! David Huffman devised the algorithm in 1952 as an MIT term paper, sidestepping
//! the exam by solving the open problem: build the code bottom-up from the rarest
//! symbols instead of top-down from the most frequent.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s$ with empirical probabilities $p_s$, the greedy merge
//! produces a prefix code whose expected length $L = \sum_s p_s \ell_s$ is
//! minimal among all prefix codes, and is bounded by the Shannon entropy
//! $H = -\sum_s p_s \log_2 p_s$:
//!
//! ```text
//! H <= L < H + 1
//! ```
//!
//! The loss against $H$ comes from rounding code lengths to whole bits; closing
//! it is what arithmetic coding and ANS are for.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n)$ to count and pack bits, $O(k \log k)$ to build the tree,
//!   where $k \le 256$ is the distinct-symbol count.
//! - **Space**: $O(k)$ for the tree and code table, $O(n)$ for buffers.
//!
//! ## Failure Modes
//!
//! 1. **Incompressible input**: uniformly distributed bytes get 8-bit codes,
//!    and the frequency-table header makes the container *larger* than the input.
//! 2. **Nondeterministic ties**: the header transmits frequencies only, so both
//!    sides must break equal-weight merges identically or the decoder walks a
//!    different tree. This crate fixes insertion-order tie-breaking in
//!    [`heap::MinHeap`].
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`compress`] / [`decompress`]**: byte slice to container and back, with
//!   [`compress_file`] / [`decompress_file`] conveniences.
//! - **[`CompressionStats`]**: entropy, mean code length, and efficiency of a run.
//! - The pieces — [`freq`], [`heap`], [`tree`], [`code`], [`bitio`] — are public
//!   for reuse and inspection.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. & Thomas, J. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod code;
pub mod container;
pub mod error;
pub mod freq;
pub mod heap;
pub mod stats;
pub mod tree;

pub use container::{compress, compress_file, decompress, decompress_file};
pub use error::Error;
pub use stats::CompressionStats;
