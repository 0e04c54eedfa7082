use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid note {0:?}: expected a pitch class (C, C#, ... B) followed by an octave 0-8")]
    InvalidNote(String),

    #[error("Invalid frequency {0} Hz: must be above 0 and below the sample rate")]
    InvalidFrequency(f64),

    #[error("Invalid duty cycle {0}: must be between 1 and 100")]
    InvalidDutyCycle(u8),

    #[error("Unknown waveform {0:?}")]
    UnknownWaveform(String),

    #[error("Cannot tile an empty cycle")]
    EmptyCycle,

    #[error("Invalid duration {0} s")]
    InvalidDuration(f64),

    #[error("PCM payload of {0} bytes does not fit in a WAV header")]
    PayloadTooLarge(usize),

    #[error("Invalid path: {0:?}")]
    InvalidPath(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
