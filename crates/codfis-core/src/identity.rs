//! # Code Newtypes
//!
//! Validated newtypes for the two codes the engine deals in: the 4-character
//! [`PlaceCode`] that a resolver returns, and the finished 16-character
//! [`TaxCode`].
//!
//! ## Validation
//!
//! [`PlaceCode`] validates its format at construction and on deserialization.
//! [`TaxCode`] can only be produced from a 15-character body, with the
//! control character computed on the way in, so the 16th character always
//! agrees with the first fifteen.

use serde::{Deserialize, Serialize};

use crate::checksum::{control_character, BODY_LENGTH};
use crate::error::{CodfisError, ValidationError};

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

fn is_code_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Official code of a place of birth (Belfiore code).
///
/// Italian municipalities use a letter followed by three digits (`H501` for
/// Roma); foreign countries use `Z` plus three digits (`Z110` for France).
///
/// # Validation
///
/// - Surrounding whitespace is trimmed and the value uppercased
/// - Must be exactly 4 characters from `0-9A-Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlaceCode(String);

impl_validating_deserialize!(PlaceCode);

impl PlaceCode {
    /// Length of a place code.
    pub const LEN: usize = 4;

    /// Create a place code, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPlaceCode`] if the value is not
    /// exactly 4 characters from `0-9A-Z` after normalization.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let upper = raw.trim().to_ascii_uppercase();
        if upper.len() != Self::LEN || !upper.chars().all(is_code_char) {
            return Err(ValidationError::InvalidPlaceCode(raw));
        }
        Ok(Self(upper))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete 16-character tax code.
///
/// Layout: `[surname 3][name 3][date+sex 5][place 4][control 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaxCode(String);

impl TaxCode {
    /// Total length of a tax code.
    pub const LEN: usize = BODY_LENGTH + 1;

    /// Complete a 15-character body by appending its control character.
    ///
    /// # Errors
    ///
    /// - [`CodfisError::InvalidBodyLength`] if `body` is not 15 characters.
    /// - [`CodfisError::InvalidCharacter`] if `body` contains anything outside `0-9A-Z`.
    pub fn from_body(body: &str) -> Result<Self, CodfisError> {
        let control = control_character(body)?;
        let mut code = String::with_capacity(Self::LEN);
        code.push_str(body);
        code.push(control);
        Ok(Self(code))
    }

    /// Access the full 16-character code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first 15 characters, the input of the control character.
    pub fn body(&self) -> &str {
        &self.0[..BODY_LENGTH]
    }

    /// The trailing control character.
    pub fn control(&self) -> char {
        self.0.as_bytes()[BODY_LENGTH] as char
    }

    /// The 3-character surname fragment.
    pub fn surname_part(&self) -> &str {
        &self.0[0..3]
    }

    /// The 3-character given-name fragment.
    pub fn name_part(&self) -> &str {
        &self.0[3..6]
    }

    /// The 5-character date and sex fragment.
    pub fn date_part(&self) -> &str {
        &self.0[6..11]
    }

    /// The 4-character place fragment.
    pub fn place_part(&self) -> &str {
        &self.0[11..15]
    }
}

impl std::fmt::Display for TaxCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TaxCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
