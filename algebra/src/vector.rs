//! Operations over radix digit-vectors.
//!
//! A digit-vector is a string of digit characters in a declared base
//! (2 to 36). The codec uses base 2 exclusively; the operations stay
//! radix-generic because callers also exercise them in bases 10 and 16.

use crate::digit::digit_value;
use crate::{AlgebraError, Matrix};

/// Calculates the element-wise sum of two vectors modulo `base`.
///
/// # Errors
///
/// Returns [`AlgebraError::LengthMismatch`] if the vectors have different
/// lengths, or [`AlgebraError::InvalidDigit`] if any character is not a
/// valid digit for `base`.
pub fn add(a: &str, b: &str, base: u32) -> Result<String, AlgebraError> {
    if a.len() != b.len() {
        return Err(AlgebraError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    a.chars()
        .zip(b.chars())
        .map(|(x, y)| {
            let sum = (digit_value(x, base)? + digit_value(y, base)?) % base;
            Ok(digit_char(sum, base))
        })
        .collect()
}

/// Calculates the weight of a vector: the number of characters not equal
/// to `'0'`, regardless of base.
#[inline]
pub fn weight(value: &str) -> usize {
    value.chars().filter(|&character| character != '0').count()
}

/// Returns the concatenation of two vectors.
#[inline]
pub fn concat(a: &str, b: &str) -> String {
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    joined
}

/// Multiplies a vector by a matrix over the integers modulo `base`.
///
/// The result's length equals the matrix's width.
///
/// # Errors
///
/// Returns [`AlgebraError::HeightMismatch`] if the vector's length does not
/// equal the matrix's height, or [`AlgebraError::InvalidDigit`] if any
/// character is not a valid digit for `base`.
pub fn mul_matrix(vector: &str, matrix: &Matrix, base: u32) -> Result<String, AlgebraError> {
    if vector.len() != matrix.height() {
        return Err(AlgebraError::HeightMismatch {
            len: vector.len(),
            height: matrix.height(),
        });
    }

    let digits = vector
        .chars()
        .map(|character| digit_value(character, base))
        .collect::<Result<Vec<u32>, AlgebraError>>()?;

    let product = (0..matrix.width())
        .map(|column| {
            let sum: u32 = digits
                .iter()
                .zip(matrix.rows())
                .map(|(&digit, row)| digit * row[column])
                .sum();
            digit_char(sum % base, base)
        })
        .collect();
    Ok(product)
}

/// Generates a vector of `length` characters by cycling the `fill` pattern,
/// then overwriting positions per the `(index, character)` transforms.
///
/// # Panics
///
/// Panics if `fill` is empty or a transform index is out of bounds.
pub fn generate(fill: &str, length: usize, transforms: &[(usize, char)]) -> String {
    assert!(!fill.is_empty(), "fill pattern must not be empty");

    let mut characters: Vec<char> = fill.chars().cycle().take(length).collect();
    for &(index, character) in transforms {
        characters[index] = character;
    }
    characters.into_iter().collect()
}

/// Splits a vector into consecutive chunks of `size` characters.
///
/// The final chunk may be shorter when the length is not a multiple of
/// `size`; an empty input yields no chunks.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunks(value: &str, size: usize) -> Vec<&str> {
    assert!(size > 0, "chunk size must be positive");

    let mut parts = Vec::with_capacity(value.len().div_ceil(size));
    let mut rest = value;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(at, _)| at);
        let (head, tail) = rest.split_at(cut);
        parts.push(head);
        rest = tail;
    }
    parts
}

/// Maps a reduced digit back to its character.
#[inline]
fn digit_char(value: u32, base: u32) -> char {
    debug_assert!(value < base);
    char::from_digit(value, base).expect("digit is reduced modulo base")
}
