//! # Date Encoder
//!
//! Encodes date of birth and sex into the 5-character fragment
//! `YY M DD`: two-digit year, month letter, two-digit day. Female birth
//! days are shifted by 40, so the day field spans `01-31` for males and
//! `41-71` for females.

use chrono::{Datelike, NaiveDate};

use crate::person::Sex;

/// Month letters, January first. Not a contiguous range of the alphabet.
pub const MONTHS: &str = "ABCDEHLMPRST";

/// Day offset applied to female birth days.
pub const FEMALE_DAY_OFFSET: u32 = 40;

/// Length of the date fragment.
pub const DATE_FRAGMENT_LEN: usize = 5;

/// Encode a date of birth and sex into the 5-character date fragment.
///
/// The caller guarantees a valid calendar date; no plausibility checks are
/// made here.
pub fn encode_date(dob: NaiveDate, sex: Sex) -> String {
    let year = dob.year().rem_euclid(100);
    let month = MONTHS.as_bytes()[dob.month0() as usize] as char;
    let day = match sex {
        Sex::Male => dob.day(),
        Sex::Female => dob.day() + FEMALE_DAY_OFFSET,
    };
    format!("{year:02}{month}{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn male_and_female_same_day() {
        assert_eq!(encode_date(date(1985, 3, 17), Sex::Male), "85C17");
        assert_eq!(encode_date(date(1985, 3, 17), Sex::Female), "85C57");
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        assert_eq!(encode_date(date(1900, 1, 1), Sex::Male), "00A01");
        assert_eq!(encode_date(date(2001, 12, 7), Sex::Female), "01T47");
        assert_eq!(encode_date(date(2009, 6, 9), Sex::Male), "09H09");
    }

    #[test]
    fn every_month_maps_to_its_letter() {
        let letters: String = (1..=12)
            .map(|m| encode_date(date(2000, m, 1), Sex::Male))
            .map(|f| f.chars().nth(2).unwrap())
            .collect();
        assert_eq!(letters, MONTHS);
    }

    #[test]
    fn female_day_range_is_41_to_71() {
        assert_eq!(encode_date(date(1990, 1, 1), Sex::Female), "90A41");
        assert_eq!(encode_date(date(1990, 1, 31), Sex::Female), "90A71");
    }

    #[test]
    fn fragment_is_always_five_characters() {
        for (y, m, d) in [(1813, 10, 10), (1999, 2, 28), (2024, 2, 29), (10, 7, 4)] {
            for sex in [Sex::Male, Sex::Female] {
                assert_eq!(encode_date(date(y, m, d), sex).len(), DATE_FRAGMENT_LEN);
            }
        }
    }
}
