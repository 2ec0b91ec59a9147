//! The `Note` value type and its canonical semitone-offset representation.

use serde::{Deserialize, Serialize};

use crate::constants::A4_MIDI;

/// A pitch in the equal-tempered twelve-tone scale.
///
/// A `Note` is a single signed semitone offset from A4: 0 is A4, +12 is A5,
/// -12 is A3. Name strings, MIDI numbers, and frequencies are all pure
/// functions of that offset, so two notes are equal exactly when they are
/// the same pitch, regardless of how they were spelled or constructed.
/// Ordering follows the offset (lower pitch sorts first), and the `Default`
/// note is A4.
///
/// Any `i32` offset is a valid note; no validation happens at this level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Note {
    /// Semitone offset from A4.
    offset: i32,
}

impl Note {
    /// A4, the reference pitch (offset 0, MIDI 69).
    pub const A4: Note = Note { offset: 0 };

    /// Creates a note from its semitone offset relative to A4.
    pub fn from_semitone_offset(offset: i32) -> Self {
        Self { offset }
    }

    /// Returns the canonical semitone offset from A4.
    pub fn semitone_offset(self) -> i32 {
        self.offset
    }

    /// Creates a note from a MIDI note number (69 = A4).
    ///
    /// The offset is `midi - 69` in plain `i32` arithmetic, exact for MIDI
    /// numbers down to `i32::MIN + 69`.
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// assert_eq!(Note::from_midi(69), Note::A4);
    /// assert_eq!(Note::from_midi(81).semitone_offset(), 12);
    /// ```
    pub fn from_midi(midi: i32) -> Self {
        Self {
            offset: midi - A4_MIDI,
        }
    }

    /// Returns the MIDI note number (69 = A4).
    ///
    /// The number is `offset + 69` in plain `i32` arithmetic, exact for
    /// offsets up to `i32::MAX - 69`.
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// assert_eq!(Note::A4.to_midi(), 69);
    /// ```
    pub fn to_midi(self) -> i32 {
        self.offset + A4_MIDI
    }

    /// Returns the semitone class in `0..=11`, where class 0 is A.
    pub fn semitone_class(self) -> i32 {
        self.offset.rem_euclid(12)
    }

    /// Returns the octave this note falls in.
    ///
    /// Octave bands are A-anchored: octave `n` spans A(n)..G#(n), and
    /// octave 4 contains A4.
    pub fn octave(self) -> i32 {
        self.offset.div_euclid(12) + 4
    }
}
