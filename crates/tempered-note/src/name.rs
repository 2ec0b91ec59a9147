//! Note-name parsing and rendering.

use std::fmt;
use std::str::FromStr;

use crate::constants::{LETTER_CLASSES, SHARP_NAMES};
use crate::error::NoteError;
use crate::note::Note;
use crate::validation::is_valid_note_name;

impl Note {
    /// Parses a note name such as `"A4"`, `"G#3"`, or `"Bb-1"`.
    ///
    /// Returns `None` for anything that is not a well-formed note name, and
    /// for names whose octave digits or resulting offset do not fit an
    /// `i32`. Enharmonic spellings collapse to the same note.
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// assert_eq!(Note::from_name("A4"), Some(Note::A4));
    /// assert_eq!(Note::from_name("Eb2"), Note::from_name("D#2"));
    /// assert_eq!(Note::from_name("BB2"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Note> {
        if !is_valid_note_name(name) {
            return None;
        }

        let letter = name.chars().next()?;
        let class = LETTER_CLASSES
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, s)| *s as i32)?;

        // Validation has already pinned the accidental and sign positions,
        // so presence scans suffice here.
        let modifier = if name.contains('#') {
            1
        } else if name.contains('b') {
            -1
        } else {
            0
        };
        let sign = if name.contains('-') { -1 } else { 1 };

        let digits: String = name.chars().skip_while(|c| !c.is_ascii_digit()).collect();
        let magnitude: i32 = digits.parse().ok()?;
        let octave = sign * magnitude;

        let offset = octave
            .checked_sub(4)?
            .checked_mul(12)?
            .checked_add(class + modifier)?;
        Some(Note::from_semitone_offset(offset))
    }

    /// Renders the canonical sharp-preferred name, e.g. `"G#3"`.
    ///
    /// Flats are never produced, even when the note was parsed from a flat
    /// spelling.
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// assert_eq!(Note::A4.name(), "A4");
    /// assert_eq!(Note::from_midi(70).name(), "A#4");
    /// assert_eq!(Note::from_name("Bb2").unwrap().name(), "A#2");
    /// ```
    pub fn name(self) -> String {
        format!(
            "{}{}",
            SHARP_NAMES[self.semitone_class() as usize],
            self.octave()
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Note {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::from_name(s).ok_or_else(|| NoteError::InvalidName(s.to_string()))
    }
}
