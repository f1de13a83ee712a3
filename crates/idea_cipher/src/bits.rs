//! Binary-string representation of fixed-width values.
//!
//! Blocks, keys and words can be written as strings of `'0'`/`'1'`,
//! most significant bit first. The cipher itself never works on strings;
//! these helpers only convert at the boundary.

use thiserror::Error;

/// Errors that can occur when converting between bit strings and integers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitsError {
    /// Occurs when two bit strings (or a bit string and a fixed width)
    /// do not have the same number of bits.
    #[error("bit length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Number of bits required by the operation.
        expected: usize,
        /// Number of bits actually supplied.
        actual: usize,
    },

    /// Occurs when a bit string contains a character other than `0` or `1`.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Zero-based character index of the offending digit.
        position: usize,
    },
}

/// Parses a bit string of exactly `width` bits into an integer.
///
/// # Errors
/// - [`BitsError::LengthMismatch`]: If `bits` is not exactly `width` characters long.
/// - [`BitsError::InvalidDigit`]: If a character is neither `0` nor `1`.
pub fn parse_bits(bits: &str, width: usize) -> Result<u128, BitsError> {
    debug_assert!(width <= u128::BITS as usize);

    let length = bits.chars().count();
    if length != width {
        return Err(BitsError::LengthMismatch {
            expected: width,
            actual: length,
        });
    }

    bits.chars()
        .enumerate()
        .try_fold(0u128, |value, (position, digit)| match digit {
            '0' => Ok(value << 1),
            '1' => Ok((value << 1) | 1),
            digit => Err(BitsError::InvalidDigit { digit, position }),
        })
}

/// Formats the lowest `width` bits of `value`, zero-padded on the left.
pub fn format_bits(value: u128, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// XORs two bit strings of equal length.
///
/// # Errors
/// - [`BitsError::LengthMismatch`]: If the operands differ in length.
/// - [`BitsError::InvalidDigit`]: If either operand contains a character
///   other than `0` or `1`.
pub fn xor_bits(a: &str, b: &str) -> Result<String, BitsError> {
    let (a_length, b_length) = (a.chars().count(), b.chars().count());
    if a_length != b_length {
        return Err(BitsError::LengthMismatch {
            expected: a_length,
            actual: b_length,
        });
    }

    a.chars()
        .zip(b.chars())
        .enumerate()
        .map(|(position, pair)| match pair {
            ('0', '0') | ('1', '1') => Ok('0'),
            ('0', '1') | ('1', '0') => Ok('1'),
            ('0' | '1', digit) | (digit, _) => Err(BitsError::InvalidDigit { digit, position }),
        })
        .collect()
}
