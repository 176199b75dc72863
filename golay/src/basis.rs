//! The two fixed 12 × 12 matrices from which the generator and control
//! matrices of the code are derived.

use algebra::Matrix;
use once_cell::sync::Lazy;

/// Dimension of the message space and of the two structural matrices.
pub const DIMENSION: usize = 12;

/// Radix of every vector the codec touches.
pub(crate) const BASE: u32 = 2;

/// Row table of the structural matrix.
///
/// This is an external mathematical constant, not derived by any formula in
/// this crate; it must be reproduced bit for bit. A transcription error
/// stays self-consistent and silently breaks both encoding and decoding,
/// so the test suite re-derives the code's minimum distance and the zero
/// syndrome of every extended codeword from these values.
const B_ROWS: [[u32; DIMENSION]; DIMENSION] = [
    [1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1],
    [0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1],
    [1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1],
    [0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1],
    [0, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1],
    [0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1],
    [0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];

/// The structural matrix `B` of the Golay code construction.
pub static B_MATRIX: Lazy<Matrix> =
    Lazy::new(|| Matrix::from_rows(B_ROWS.iter().map(|row| row.to_vec()).collect()));

/// The 12 × 12 identity matrix.
pub static IDENTITY: Lazy<Matrix> = Lazy::new(|| Matrix::identity(DIMENSION));
