#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Arithmetic over radix digit-vectors and small integer matrices.

pub mod digit;
pub mod vector;

mod error;
mod matrix;

pub use error::AlgebraError;
pub use matrix::Matrix;
