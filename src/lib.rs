//! Chiptune-style waveforms rendered to 16-bit mono PCM and WAV.
//!
//! ```
//! use chipwave::{wav, Synthesizer};
//!
//! let mut synth = Synthesizer::with_seed(0);
//! let pcm = synth.pulse("C#4", 0.3, 0.25, 25)?;
//! let file = wav::to_wav(&pcm)?;
//! assert_eq!(file.len(), 44 + 2 * 11025);
//! # Ok::<(), chipwave::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod gen;
pub mod note;
pub mod pcm;
pub mod wav;

pub use error::{Error, Result};
pub use gen::{Synthesizer, Waveform, WaveformRequest};
pub use note::NoteSpec;
