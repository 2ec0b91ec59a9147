//! Note-name validation.

use std::sync::OnceLock;

use regex::Regex;

/// Regex pattern for a well-formed note name.
/// Format: one letter A-G, at most one accidental (`#` or `b`), an optional
/// `-` sign, and one or more octave digits, anchored at both ends.
const NOTE_NAME_PATTERN: &str = r"^[A-G][#b]?-?[0-9]+$";

static NOTE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_name_regex() -> &'static Regex {
    NOTE_NAME_REGEX.get_or_init(|| Regex::new(NOTE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Checks whether a string is a well-formed note name such as `"A4"`,
/// `"G#-4"`, or `"Bb2"`.
///
/// The grammar is one uppercase letter A-G, at most one accidental (`#`
/// for sharp, `b` for flat), an optional `-` sign, and one or more decimal
/// digits. Anything else is rejected: doubled accidentals, letters outside
/// A-G, missing digits, or trailing garbage after the digits.
///
/// # Examples
/// ```
/// use tempered_note::is_valid_note_name;
///
/// assert!(is_valid_note_name("A4"));
/// assert!(is_valid_note_name("Bb2"));
/// assert!(is_valid_note_name("G#-4"));
/// assert!(!is_valid_note_name("G##4"));
/// assert!(!is_valid_note_name("C3P0"));
/// assert!(!is_valid_note_name(""));
/// ```
pub fn is_valid_note_name(name: &str) -> bool {
    note_name_regex().is_match(name)
}
