//! Vector encoding for the Golay code C23.

use algebra::{digit, vector, Matrix};
use rayon::prelude::*;

use crate::basis::{B_MATRIX, BASE, DIMENSION, IDENTITY};
use crate::CodecError;

/// Encoder mapping 12-character message blocks to 23-character codewords.
///
/// The generator matrix `G = [I | B′]` is derived once at construction,
/// where `B′` is the structural matrix with its last column removed.
#[derive(Clone, Debug)]
pub struct GolayEncoder {
    generator: Matrix,
}

impl GolayEncoder {
    /// The number of characters consumed per encoded block.
    pub const MESSAGE_LEN: usize = DIMENSION;

    /// The number of characters produced per encoded block.
    pub const CODEWORD_LEN: usize = 2 * DIMENSION - 1;

    /// Creates a new [`GolayEncoder`].
    pub fn new() -> Self {
        let generator = IDENTITY.hstack(&B_MATRIX.without_last_column());
        Self { generator }
    }

    /// Encodes a binary string of any length.
    ///
    /// The value is split into blocks of [`Self::MESSAGE_LEN`] characters,
    /// the last block right-padded with `'0'`, and every block is mapped
    /// to its codeword by multiplication with the generator matrix. The
    /// codewords are concatenated in block order; blocks are independent
    /// and processed in parallel. An empty value encodes to an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NonBinary`] if `value` contains a character
    /// other than `'0'` or `'1'`.
    pub fn encode(&self, value: &str) -> Result<String, CodecError> {
        if !digit::is_binary(value) {
            return Err(CodecError::NonBinary);
        }

        let codewords = vector::chunks(value, Self::MESSAGE_LEN)
            .par_iter()
            .map(|block| self.encode_block(block))
            .collect::<Result<Vec<String>, CodecError>>()?;
        Ok(codewords.concat())
    }

    fn encode_block(&self, block: &str) -> Result<String, CodecError> {
        let mut message = String::with_capacity(Self::MESSAGE_LEN);
        message.push_str(block);
        while message.len() < Self::MESSAGE_LEN {
            message.push('0');
        }
        Ok(vector::mul_matrix(&message, &self.generator, BASE)?)
    }
}

impl Default for GolayEncoder {
    fn default() -> Self {
        Self::new()
    }
}
