//! Turning note names like `"A4"` or `"C#5"` into frequencies.

use crate::error::{Error, Result};

/// Base frequency of each pitch class at octave 4.
pub const PITCH_TABLE: [(&str, f64); 12] = [
    ("C", 261.63),
    ("C#", 277.183),
    ("D", 293.66),
    ("D#", 311.127),
    ("E", 329.63),
    ("F", 349.23),
    ("F#", 369.994),
    ("G", 392.00),
    ("G#", 415.305),
    ("A", 440.00),
    ("A#", 466.164),
    ("B", 493.88),
];

/// Frequency multiplier for octaves 0 through 8. Octave 4 is the reference.
pub const OCTAVE_TABLE: [f64; 9] = [0.06, 0.12, 0.25, 0.5, 1., 2., 4., 8., 16.];

pub fn pitch_frequency(pitch: &str) -> Option<f64> {
    PITCH_TABLE
        .iter()
        .find(|(name, _)| *name == pitch)
        .map(|&(_, freq)| freq)
}

pub fn octave_multiplier(octave: u32) -> Option<f64> {
    OCTAVE_TABLE.get(octave as usize).copied()
}

/// Resolve a note name of the form `<pitch><octave>`, e.g. `"A4"` or `"F#2"`.
///
/// The octave is always the single last character. Pitch names are
/// case-sensitive and only sharps are known.
pub fn resolve(name: &str) -> Result<f64> {
    let invalid = || Error::InvalidNote(name.to_owned());

    let mut chars = name.chars();
    let octave = chars.next_back().ok_or_else(invalid)?;
    let pitch = chars.as_str();

    let base = pitch_frequency(pitch).ok_or_else(invalid)?;
    let multiplier = octave
        .to_digit(10)
        .and_then(octave_multiplier)
        .ok_or_else(invalid)?;

    Ok(base * multiplier)
}

/// Either a named note or a raw frequency in Hz.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteSpec {
    Name(String),
    Frequency(f64),
}

impl NoteSpec {
    pub fn resolve(&self) -> Result<f64> {
        match self {
            NoteSpec::Name(name) => resolve(name),
            NoteSpec::Frequency(freq) if freq.is_finite() && *freq > 0. => Ok(*freq),
            NoteSpec::Frequency(freq) => Err(Error::InvalidFrequency(*freq)),
        }
    }
}

impl From<f64> for NoteSpec {
    fn from(freq: f64) -> Self {
        NoteSpec::Frequency(freq)
    }
}
impl From<&str> for NoteSpec {
    fn from(name: &str) -> Self {
        NoteSpec::Name(name.to_owned())
    }
}
impl From<String> for NoteSpec {
    fn from(name: String) -> Self {
        NoteSpec::Name(name)
    }
}

/// Numeric literals become frequencies, anything else a note name.
impl std::str::FromStr for NoteSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<f64>() {
            Ok(freq) => NoteSpec::Frequency(freq),
            Err(_) => NoteSpec::Name(s.to_owned()),
        })
    }
}

impl std::fmt::Display for NoteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteSpec::Name(name) => write!(f, "{name}"),
            NoteSpec::Frequency(freq) => write!(f, "{freq} Hz"),
        }
    }
}
