//! A synthetic channel flipping characters independently.

use algebra::digit;
use rand::Rng;

use crate::ChannelError;

/// Default per-character distortion probability.
pub const DEFAULT_DISTORTION_PROBABILITY: f64 = 0.05;

/// Simulates sending a binary string through a distortion channel.
///
/// Every character is flipped independently with probability
/// `probability`, except the last `ignore_last` characters, which pass
/// through unchanged. The output always has the same length and alphabet
/// as the input.
///
/// # Errors
///
/// Returns [`ChannelError::NonBinary`] if `value` contains a character
/// other than `'0'` or `'1'`.
///
/// # Panics
///
/// Panics if `probability` is not in `[0, 1]`, propagated from
/// [`Rng::gen_bool`].
pub fn transmit<R: Rng + ?Sized>(
    value: &str,
    probability: f64,
    ignore_last: usize,
    rng: &mut R,
) -> Result<String, ChannelError> {
    if !digit::is_binary(value) {
        return Err(ChannelError::NonBinary);
    }

    let protected_from = value.len().saturating_sub(ignore_last);
    Ok(value
        .chars()
        .enumerate()
        .map(|(at, character)| {
            if at >= protected_from || !rng.gen_bool(probability) {
                character
            } else if character == '0' {
                '1'
            } else {
                '0'
            }
        })
        .collect())
}

/// Compares two binary strings and returns their element-wise XOR.
///
/// The result marks with `'1'` every position where the strings differ,
/// which is how callers display the characters a channel flipped.
///
/// # Errors
///
/// Returns [`ChannelError::NonBinary`] if either string is not binary, or
/// [`ChannelError::LengthMismatch`] if their lengths differ.
pub fn xor(a: &str, b: &str) -> Result<String, ChannelError> {
    if !digit::is_binary(a) || !digit::is_binary(b) {
        return Err(ChannelError::NonBinary);
    }
    if a.len() != b.len() {
        return Err(ChannelError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.chars()
        .zip(b.chars())
        .map(|(x, y)| if x == y { '0' } else { '1' })
        .collect())
}
