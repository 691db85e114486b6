//! # Personal Data
//!
//! The input of code generation. A [`PersonalData`] value is immutable once
//! built; [`PersonalData::parse`] is the boundary where raw user strings are
//! checked, so the encoders downstream can assume a well-formed value.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Accepted format for textual dates of birth.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Sex as recorded on the tax code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// `M`.
    Male,
    /// `F`. Shifts the encoded birth day by 40.
    Female,
}

impl Sex {
    /// Single-letter code, `M` or `F`.
    pub fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            _ => Err(InputError::InvalidSex(s.to_string())),
        }
    }
}

/// Everything needed to compute a tax code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalData {
    name: String,
    surname: String,
    sex: Sex,
    date_of_birth: NaiveDate,
    place_of_birth: String,
}

impl PersonalData {
    /// Build from already-typed values.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        sex: Sex,
        date_of_birth: NaiveDate,
        place_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            sex,
            date_of_birth,
            place_of_birth: place_of_birth.into(),
        }
    }

    /// Build from raw user input.
    ///
    /// `sex` is `M` or `F` in either case; `dob` is `DD/MM/YYYY`. Blank names
    /// are accepted and encode to `XXX`.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyField`] if the place of birth is blank.
    /// - [`InputError::InvalidSex`] for any other sex value.
    /// - [`InputError::InvalidDate`] if `dob` is malformed or not a real date.
    pub fn parse(
        name: &str,
        surname: &str,
        sex: &str,
        dob: &str,
        place: &str,
    ) -> Result<Self, InputError> {
        require("place of birth", place)?;

        let sex = sex.parse::<Sex>()?;
        let date_of_birth =
            NaiveDate::parse_from_str(dob.trim(), DATE_FORMAT).map_err(|e| {
                InputError::InvalidDate {
                    input: dob.to_string(),
                    reason: e.to_string(),
                }
            })?;

        Ok(Self::new(name.trim(), surname.trim(), sex, date_of_birth, place.trim()))
    }

    /// Given name as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surname as supplied.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Recorded sex.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Place of birth as supplied (not yet resolved).
    pub fn place_of_birth(&self) -> &str {
        &self.place_of_birth
    }

    /// Greeting printed before the code, e.g.
    /// `"Caro Mario Rossi, il tuo codice fiscale è..."`.
    pub fn salutation(&self) -> String {
        let ending = match self.sex {
            Sex::Male => 'o',
            Sex::Female => 'a',
        };
        format!(
            "Car{ending} {} {}, il tuo codice fiscale è...",
            capitalize(&self.name),
            capitalize(&self.surname)
        )
    }
}

fn require(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::EmptyField(field));
    }
    Ok(())
}

/// First character uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
