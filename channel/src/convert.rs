//! Conversions between text and binary payload strings.

use algebra::{digit, vector};

use crate::ChannelError;

/// The number of binary characters per UTF-16 code unit.
const UNIT_BITS: usize = 16;

/// Converts text to a binary string, one 16-character unit per UTF-16 code
/// unit.
pub fn text_to_binary(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| format!("{unit:016b}"))
        .collect()
}

/// Converts a binary string back to text.
///
/// The value is read in units of 16 characters; a shorter trailing unit is
/// parsed as-is. Code units that do not form valid UTF-16 decode to the
/// replacement character.
///
/// # Errors
///
/// Returns [`ChannelError::NonBinary`] if `value` contains a character
/// other than `'0'` or `'1'`.
pub fn binary_to_text(value: &str) -> Result<String, ChannelError> {
    if !digit::is_binary(value) {
        return Err(ChannelError::NonBinary);
    }

    let units: Vec<u16> = vector::chunks(value, UNIT_BITS)
        .into_iter()
        .map(|unit| {
            unit.chars()
                .fold(0u16, |acc, character| (acc << 1) | u16::from(character == '1'))
        })
        .collect();
    Ok(String::from_utf16_lossy(&units))
}
