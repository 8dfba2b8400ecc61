//! Error types for the Huffman codec.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum Error {
    /// The container header or payload is malformed or truncated.
    #[error("malformed container: {0}")]
    Format(&'static str),

    /// An I/O error occurred while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
