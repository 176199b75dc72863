//! Vector decoding for the Golay code C23.
//!
//! Each received block is extended to a word of the extended code C24 and
//! run through incomplete maximum-likelihood decoding: a syndrome search
//! over the rows of the structural matrix, with a second syndrome as
//! fallback. The synthetic parity character is discarded afterwards.

use algebra::{digit, vector, Matrix};
use rayon::prelude::*;

use crate::basis::{B_MATRIX, BASE, DIMENSION, IDENTITY};
use crate::CodecError;

/// Decoder recovering 12-character messages from 23-character received
/// blocks, correcting up to 3 flipped characters per block.
///
/// The control matrix `H = [I ; B]` is derived once at construction.
#[derive(Clone, Debug)]
pub struct GolayDecoder {
    control: Matrix,
    scan_rows: Vec<String>,
}

impl GolayDecoder {
    /// The number of characters consumed per decoded block.
    pub const CODE_LEN: usize = 2 * DIMENSION - 1;

    /// The number of characters produced per decoded block.
    pub const MESSAGE_LEN: usize = DIMENSION;

    /// Creates a new [`GolayDecoder`].
    pub fn new() -> Self {
        let control = IDENTITY.vstack(&B_MATRIX);
        let scan_rows = B_MATRIX.rows().map(row_string).collect();
        Self { control, scan_rows }
    }

    /// Decodes a binary string of received blocks.
    ///
    /// The value is split into blocks of [`Self::CODE_LEN`] characters and
    /// every block is decoded independently; the 12-character results are
    /// concatenated in block order. Blocks carry no state across one
    /// another and are processed in parallel. An empty value decodes to an
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NonBinary`] if `value` contains a character
    /// other than `'0'` or `'1'`, or [`CodecError::BlockLength`] if its
    /// length is not a multiple of [`Self::CODE_LEN`]. Both are rejected
    /// before any block is processed.
    pub fn decode(&self, value: &str) -> Result<String, CodecError> {
        if !digit::is_binary(value) {
            return Err(CodecError::NonBinary);
        }
        if value.len() % Self::CODE_LEN != 0 {
            return Err(CodecError::BlockLength { len: value.len() });
        }

        let messages = vector::chunks(value, Self::CODE_LEN)
            .par_iter()
            .map(|block| self.decode_block(block))
            .collect::<Result<Vec<String>, CodecError>>()?;
        Ok(messages.concat())
    }

    /// Decodes a single 23-character received block.
    fn decode_block(&self, received: &str) -> Result<String, CodecError> {
        // The parity character leaves the extended word with odd total
        // weight, so its distance to the nearest codeword is odd and at
        // most 3 whenever at most 3 characters were flipped.
        let parity = if vector::weight(received) % 2 == 1 {
            "0"
        } else {
            "1"
        };
        let word = vector::concat(received, parity);

        let error = self.error_vector(&word)?;
        let trimmed = &error[..error.len() - 1];
        let codeword = vector::add(received, trimmed, BASE)?;
        Ok(codeword[..Self::MESSAGE_LEN].to_string())
    }

    /// Finds the 24-character error pattern of an extended received word.
    fn error_vector(&self, word: &str) -> Result<String, CodecError> {
        let syndrome = vector::mul_matrix(word, &self.control, BASE)?;
        if let Some((residual, unit)) = self.search(&syndrome)? {
            return Ok(vector::concat(&residual, &unit));
        }

        // Fallback: the second syndrome locates errors concentrated in the
        // parity half, so the pattern's halves swap on assembly.
        let second = vector::mul_matrix(&syndrome, &B_MATRIX, BASE)?;
        match self.search(&second)? {
            Some((residual, unit)) => Ok(vector::concat(&unit, &residual)),
            None => Err(CodecError::Uncorrectable),
        }
    }

    /// Scans a syndrome for the two halves of an error pattern.
    ///
    /// Keeps the last matching scan row; for a block within the correction
    /// capability at most one row can match.
    fn search(&self, syndrome: &str) -> Result<Option<(String, String)>, CodecError> {
        if vector::weight(syndrome) <= 3 {
            let zero = vector::generate("0", DIMENSION, &[]);
            return Ok(Some((syndrome.to_string(), zero)));
        }

        let mut found = None;
        for (at, row) in self.scan_rows.iter().enumerate() {
            let residual = vector::add(syndrome, row, BASE)?;
            if vector::weight(&residual) <= 2 {
                let unit = vector::generate("0", DIMENSION, &[(at, '1')]);
                found = Some((residual, unit));
            }
        }
        Ok(found)
    }
}

impl Default for GolayDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn row_string(row: &[u32]) -> String {
    row.iter()
        .map(|&digit| if digit == 0 { '0' } else { '1' })
        .collect()
}
