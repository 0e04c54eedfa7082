//! The fixed audio format everything in this crate renders to.

pub const SAMPLE_RATE: u32 = 44100;
pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;
pub const BYTES_PER_SAMPLE: usize = BITS_PER_SAMPLE as usize / 8;

/// Full-scale value a sample of `1.0` maps to.
pub const AMPLITUDE_SCALE: f64 = i16::MAX as f64;

/// Number of samples in `length_s` seconds, rounded down.
pub fn sample_count(length_s: f64) -> usize {
    (SAMPLE_RATE as f64 * length_s) as usize
}
