//! # Alphabet Tables
//!
//! Character-to-value mappings used by the control-character algorithm.
//! The domain is the 36-symbol alphabet `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ`;
//! digits and letters are indexed within their own class, so `'0'` and `'A'`
//! share index 0.
//!
//! The "odd" table is a fixed historical permutation and is not derivable
//! from any formula. It is embedded verbatim.

use crate::error::CodfisError;

/// Number of entries in each value table (one per letter).
pub const ALPHABET_SIZE: usize = 26;

/// Weights for characters at even 0-based indices of the body
/// (historically called "odd positions").
pub const ODD_VALUES: [u32; ALPHABET_SIZE] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Zero-based index of `c` within its class: `0-9` → 0..=9, `A-Z` → 0..=25.
fn class_index(c: char) -> Result<usize, CodfisError> {
    if c.is_ascii_digit() {
        Ok(c as usize - '0' as usize)
    } else if c.is_ascii_uppercase() {
        Ok(c as usize - 'A' as usize)
    } else {
        Err(CodfisError::InvalidCharacter { character: c })
    }
}

/// Value of a character at an odd 0-based index of the body.
///
/// # Errors
///
/// Returns [`CodfisError::InvalidCharacter`] for anything outside `0-9A-Z`.
pub fn even_value(c: char) -> Result<u32, CodfisError> {
    class_index(c).map(|i| i as u32)
}

/// Value of a character at an even 0-based index of the body.
///
/// # Errors
///
/// Returns [`CodfisError::InvalidCharacter`] for anything outside `0-9A-Z`.
pub fn odd_value(c: char) -> Result<u32, CodfisError> {
    class_index(c).map(|i| ODD_VALUES[i])
}
