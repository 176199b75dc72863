//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Error that occurs when an input contains a character other than `'0'` or `'1'`.
    #[error("Received an unexpected non-binary string.")]
    NonBinary,
    /// Error that occurs when two strings being compared have different lengths.
    #[error("The lengths of the strings do not match.")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}
