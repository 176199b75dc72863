#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Encoder and decoder for the binary Golay code C23.
//!
//! The (23,12) Golay code has minimum distance 7 and corrects up to 3
//! flipped characters per 23-character block. Decoding extends each block
//! to a word of the extended code C24 and runs a two-phase syndrome search
//! over the rows of the structural matrix.

mod basis;
mod decoder;
mod encoder;
mod error;

pub use basis::{B_MATRIX, DIMENSION, IDENTITY};
pub use decoder::GolayDecoder;
pub use encoder::GolayEncoder;
pub use error::CodecError;
