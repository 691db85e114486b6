//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the encoding engine. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`CodfisError`] is what code generation surfaces. A failed build never
//!   yields a partial code.
//! - [`ValidationError`] is raised by newtype constructors.
//! - [`InputError`] belongs to the input-construction boundary
//!   ([`PersonalData::parse`](crate::PersonalData::parse)), before any
//!   encoding runs.

use thiserror::Error;

/// Top-level error type for tax code generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodfisError {
    /// The place of birth has no match in the reference dataset.
    #[error("place not found: {place:?}")]
    PlaceNotFound {
        /// The place name as supplied by the caller.
        place: String,
    },

    /// An alphabet lookup received a symbol outside `0-9A-Z`.
    #[error("invalid character {character:?}: expected one of 0-9 or A-Z")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },

    /// The checksum input was not exactly 15 characters long.
    #[error("checksum body must be 15 characters, got {actual}")]
    InvalidBodyLength {
        /// Number of characters actually supplied.
        actual: usize,
    },

    /// A newtype rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Error raised when constructing a validated newtype.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Place codes are exactly 4 ASCII uppercase letters or digits.
    #[error("invalid place code {0:?}: expected 4 characters in 0-9A-Z")]
    InvalidPlaceCode(String),
}

/// Error raised while turning raw user input into [`PersonalData`](crate::PersonalData).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Sex must be `M` or `F` (case-insensitive).
    #[error("invalid sex {0:?}: expected M or F")]
    InvalidSex(String),

    /// Date of birth is not a real `DD/MM/YYYY` date.
    #[error("invalid date of birth {input:?}: {reason}")]
    InvalidDate {
        /// The raw date string.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A required field is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
