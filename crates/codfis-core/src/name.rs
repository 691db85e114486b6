//! # Name Encoder
//!
//! Turns a surname or given name into its 3-character fragment:
//! consonants first, then vowels, truncated to three and padded with `X`.
//!
//! Given names with more than three consonants lose their second consonant
//! before the fragment is taken (`FRANCO` → `FNC`). Surnames never do
//! (`FRANCO` → `FRN`).

/// Length of a name fragment.
pub const NAME_FRAGMENT_LEN: usize = 3;

/// Filler used when a name has fewer than three usable letters.
pub const PADDING: char = 'X';

const VOWELS: [char; 11] = ['A', 'E', 'I', 'O', 'U', 'À', 'È', 'É', 'Ì', 'Ò', 'Ù'];

/// Which part of the person's name is being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRole {
    /// Family name. Encoded first.
    Surname,
    /// Given name. Subject to the second-consonant drop.
    GivenName,
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Encode a name into its 3-character fragment.
///
/// The input is uppercased and stripped of spaces. Every non-vowel counts as
/// a consonant, so stray symbols (apostrophes, hyphens) pass through here and
/// are rejected later by the control-character computation.
pub fn encode_name(raw: &str, role: NameRole) -> String {
    let upper: String = raw.to_uppercase().chars().filter(|c| *c != ' ').collect();

    let (vowels, mut consonants): (Vec<char>, Vec<char>) =
        upper.chars().partition(|c| is_vowel(*c));

    if role == NameRole::GivenName && consonants.len() > 3 {
        consonants.remove(1);
    }

    let mut fragment: String = consonants
        .into_iter()
        .chain(vowels)
        .take(NAME_FRAGMENT_LEN)
        .collect();

    while fragment.chars().count() < NAME_FRAGMENT_LEN {
        fragment.push(PADDING);
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_consonants_then_vowels() {
        assert_eq!(encode_name("Rossi", NameRole::Surname), "RSS");
        assert_eq!(encode_name("Bianchi", NameRole::Surname), "BNC");
        assert_eq!(encode_name("Ida", NameRole::Surname), "DIA");
        assert_eq!(encode_name("Ugo", NameRole::Surname), "GUO");
    }

    #[test]
    fn given_name_with_three_consonants_keeps_all() {
        assert_eq!(encode_name("Mario", NameRole::GivenName), "MRA");
        assert_eq!(encode_name("Giacomo", NameRole::GivenName), "GCM");
    }

    #[test]
    fn given_name_drops_second_consonant_when_more_than_three() {
        assert_eq!(encode_name("Franco", NameRole::GivenName), "FNC");
        assert_eq!(encode_name("Marcello", NameRole::GivenName), "MCL");
        assert_eq!(encode_name("Gianfranco", NameRole::GivenName), "GFR");
        assert_eq!(encode_name("Alessandra", NameRole::GivenName), "LSN");
    }

    #[test]
    fn surname_never_drops_a_consonant() {
        assert_eq!(encode_name("Franco", NameRole::Surname), "FRN");
        assert_eq!(encode_name("Marcello", NameRole::Surname), "MRC");
    }

    #[test]
    fn spaces_are_removed() {
        assert_eq!(encode_name("De Luca", NameRole::Surname), "DLC");
        assert_eq!(encode_name("  maria  ", NameRole::GivenName), "MRA");
    }

    #[test]
    fn short_names_are_padded() {
        assert_eq!(encode_name("Lu", NameRole::Surname), "LUX");
        assert_eq!(encode_name("O", NameRole::GivenName), "OXX");
    }

    #[test]
    fn empty_name_is_all_padding() {
        assert_eq!(encode_name("", NameRole::Surname), "XXX");
        assert_eq!(encode_name("   ", NameRole::GivenName), "XXX");
    }

    #[test]
    fn accented_vowels_count_as_vowels() {
        assert_eq!(encode_name("Niccolò", NameRole::Surname), "NCC");
        // The accented vowel sorts after the consonant and stays in the fragment.
        assert_eq!(encode_name("èlia", NameRole::GivenName), "LÈI");
    }

    #[test]
    fn symbols_are_treated_as_consonants() {
        assert_eq!(encode_name("D'Amico", NameRole::Surname), "D'M");
    }
}
