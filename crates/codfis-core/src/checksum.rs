//! # Control Character
//!
//! Computes the 16th character of the tax code from the 15-character body.
//!
//! Characters at even 0-based indices (1st, 3rd, … 15th) are weighted with
//! [`odd_value`]; characters at odd 0-based indices use [`even_value`]. The
//! names follow the historical 1-indexed convention and must not be swapped.
//! The weighted sum modulo 26 selects a letter `A-Z`.

use crate::alphabet::{even_value, odd_value};
use crate::error::CodfisError;

/// Number of characters fed into the control-character computation.
pub const BODY_LENGTH: usize = 15;

/// Compute the control character for a 15-character body.
///
/// # Errors
///
/// - [`CodfisError::InvalidBodyLength`] if `body` is not 15 characters.
/// - [`CodfisError::InvalidCharacter`] if any character is outside `0-9A-Z`.
pub fn control_character(body: &str) -> Result<char, CodfisError> {
    let actual = body.chars().count();
    if actual != BODY_LENGTH {
        return Err(CodfisError::InvalidBodyLength { actual });
    }

    let mut sum = 0u32;
    for (index, c) in body.chars().enumerate() {
        sum += if index % 2 == 0 {
            odd_value(c)?
        } else {
            even_value(c)?
        };
    }

    let remainder = (sum % 26) as u8;
    Ok(char::from(b'A' + remainder))
}
