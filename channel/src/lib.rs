#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Transmission-side collaborators of the codec: a synthetic noisy channel
//! and payload conversions between text and binary strings.

mod convert;
mod error;
mod noise;

pub use convert::{binary_to_text, text_to_binary};
pub use error::ChannelError;
pub use noise::{transmit, xor, DEFAULT_DISTORTION_PROBABILITY};
