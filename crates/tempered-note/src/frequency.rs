//! Frequency conversions and nearest-semitone rounding.

use crate::constants::DEFAULT_REFERENCE_FREQUENCY;
use crate::error::NoteError;
use crate::note::Note;

impl Note {
    /// Returns the frequency in hertz, with A4 at 440 Hz.
    ///
    /// Uses the standard formula: f = reference * 2^(offset / 12).
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// let a4 = Note::A4.frequency();
    /// assert!((a4 - 440.0).abs() < 0.001);
    ///
    /// let a5 = Note::from_midi(81).frequency();
    /// assert!((a5 - 880.0).abs() < 0.001);
    /// ```
    pub fn frequency(self) -> f64 {
        self.frequency_with_reference(DEFAULT_REFERENCE_FREQUENCY)
    }

    /// Returns the frequency in hertz for a caller-supplied A4 reference.
    ///
    /// `reference` is the frequency assigned to A4 and is expected to be
    /// positive.
    pub fn frequency_with_reference(self, reference: f64) -> f64 {
        reference * 2.0_f64.powf(self.semitone_offset() as f64 / 12.0)
    }

    /// Finds the note nearest to a frequency, with A4 at 440 Hz.
    ///
    /// The continuous semitone value `12 * log2(freq / reference)` is
    /// rounded to whichever neighboring integer deviates less; an exact
    /// half-semitone tie rounds to the ceiling.
    ///
    /// # Errors
    /// Returns [`NoteError::NonPositiveFrequency`] when `freq` is zero,
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    /// ```
    /// use tempered_note::Note;
    ///
    /// assert_eq!(Note::from_frequency(440.0), Ok(Note::A4));
    /// assert_eq!(Note::from_frequency(880.0), Ok(Note::from_midi(81)));
    /// assert!(Note::from_frequency(0.0).is_err());
    /// ```
    pub fn from_frequency(freq: f64) -> Result<Note, NoteError> {
        Note::from_frequency_with_reference(freq, DEFAULT_REFERENCE_FREQUENCY)
    }

    /// Finds the note nearest to a frequency for a caller-supplied A4
    /// reference.
    ///
    /// `reference` is the frequency assigned to A4.
    ///
    /// # Errors
    /// Returns [`NoteError::NonPositiveFrequency`] when `freq` is zero,
    /// negative, NaN, or infinite, and [`NoteError::NonPositiveReference`]
    /// when `reference` is.
    pub fn from_frequency_with_reference(freq: f64, reference: f64) -> Result<Note, NoteError> {
        if !freq.is_finite() || freq <= 0.0 {
            return Err(NoteError::NonPositiveFrequency(freq));
        }
        if !reference.is_finite() || reference <= 0.0 {
            return Err(NoteError::NonPositiveReference(reference));
        }
        let n = 12.0 * (freq / reference).log2();
        Ok(Note::from_semitone_offset(nearest_semitone(n)))
    }
}

/// Rounds a continuous semitone value to the nearest integer semitone.
///
/// Picks whichever of floor/ceil deviates less; an exact half-semitone tie
/// rounds to the ceiling.
pub(crate) fn nearest_semitone(n: f64) -> i32 {
    let low = n.floor();
    let high = n.ceil();
    let low_err = n - low;
    let high_err = high - n;
    if low_err < high_err {
        low as i32
    } else {
        high as i32
    }
}
