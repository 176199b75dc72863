//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when a character is not a valid digit for the declared base.
    #[error("Invalid character {character} for base {base}.")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// The declared base.
        base: u32,
    },
    /// Error that occurs when a single-character parse receives anything but one character.
    #[error("Input must be a single character. Received: '{input}'")]
    NotSingleCharacter {
        /// The received input.
        input: String,
    },
    /// Error that occurs when two vectors being combined have different lengths.
    #[error("The lengths of the vectors do not match: {left} != {right}.")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// Error that occurs when a vector's length does not match the height of a matrix.
    #[error("Vector's length {len} does not match matrix's height {height}.")]
    HeightMismatch {
        /// The vector length.
        len: usize,
        /// The matrix height.
        height: usize,
    },
}
