//! Reference constants and lookup tables for pitch conversion.

/// MIDI note number of A4, the reference pitch.
pub const A4_MIDI: i32 = 69;

/// Default frequency assigned to A4, in hertz.
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 440.0;

/// Semitone classes for note letters (A=0, B=2, C=3, D=5, E=7, F=8, G=10).
///
/// Classes count chromatic steps up from A, matching the offset-from-A4
/// canonical form. Octave bands are A-anchored (octave 4 spans A4..G#4),
/// not aligned to the C-first ordering of scientific pitch notation.
pub(crate) const LETTER_CLASSES: [(char, i8); 7] = [
    ('A', 0),
    ('B', 2),
    ('C', 3),
    ('D', 5),
    ('E', 7),
    ('F', 8),
    ('G', 10),
];

/// Sharp-preferred names for the twelve semitone classes, class 0 = A.
pub(crate) const SHARP_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];
