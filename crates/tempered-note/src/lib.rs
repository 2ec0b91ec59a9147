//! Equal-tempered pitch type with note-name, MIDI, and frequency
//! conversions.
//!
//! This crate models a single pitch in the twelve-tone equal-tempered scale
//! as a [`Note`]: a value type wrapping one signed semitone offset from A4.
//! Name strings ("A#3"), MIDI note numbers (69 = A4), and frequencies in
//! hertz all convert to and from that offset as pure functions.
//! [`is_valid_note_name`] checks name strings without constructing
//! anything.
//!
//! # Octave convention
//!
//! Semitone classes count up from A (class 0), so octave bands are
//! A-anchored: octave 4 spans A4..G#4, and the C in that band sits three
//! semitones *above* A4. Names parse and render consistently under this
//! convention, and enharmonic spellings ("Eb2", "D#2") collapse to the same
//! note. Rendering always prefers sharps.
//!
//! # Example
//!
//! ```
//! use tempered_note::{is_valid_note_name, Note};
//!
//! let note = Note::from_name("A#3").unwrap();
//! assert_eq!(note.to_midi(), 58);
//! assert_eq!(note.name(), "A#3");
//!
//! let a4 = Note::from_frequency(440.0).unwrap();
//! assert_eq!(a4, Note::A4);
//! assert!((a4.frequency() - 440.0).abs() < 0.001);
//!
//! assert!(is_valid_note_name("Bb2"));
//! assert!(!is_valid_note_name("G##4"));
//! ```

mod constants;
mod error;
mod frequency;
mod name;
mod note;
mod validation;


pub use constants::{A4_MIDI, DEFAULT_REFERENCE_FREQUENCY};
pub use error::NoteError;
pub use note::Note;
pub use validation::is_valid_note_name;
