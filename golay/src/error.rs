//! This module defines some errors that
//! may occur during encoding or decoding.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Error that occurs when an input contains a character other than `'0'` or `'1'`.
    #[error("Received an unexpected non-binary string.")]
    NonBinary,
    /// Error that occurs when a decode input's length is not a multiple of the code length.
    #[error("Binary string length must be a multiple of the Golay code length.")]
    BlockLength {
        /// The offending input length.
        len: usize,
    },
    /// Error that occurs when neither search phase yields an error pattern.
    ///
    /// A received block within the code's correction capability always
    /// produces a pattern; this arises only beyond 3 errors per block.
    #[error("No error pattern found for the received word.")]
    Uncorrectable,
    /// Error that occurs in an underlying vector operation.
    #[error(transparent)]
    Algebra(#[from] algebra::AlgebraError),
}
