use log::trace;

use crate::{
    error::{Error, Result},
    format::{self, AMPLITUDE_SCALE, BYTES_PER_SAMPLE},
};

/// Scale a sample in `-1..=1` to 16 bits.
///
/// Values past full scale saturate at `i16::MIN`/`i16::MAX`.
pub fn quantize(sample: f64) -> i16 {
    (sample * AMPLITUDE_SCALE).round() as i16
}

/// Tile `cycle` over `length_s` seconds of little-endian 16-bit PCM.
///
/// The last repetition is cut short where the buffer ends.
pub fn pack(cycle: &[f64], length_s: f64) -> Result<Vec<u8>> {
    if cycle.is_empty() {
        return Err(Error::EmptyCycle);
    }
    if !length_s.is_finite() || length_s < 0. {
        return Err(Error::InvalidDuration(length_s));
    }

    let samples = format::sample_count(length_s);
    let quantized: Vec<i16> = cycle.iter().copied().map(quantize).collect();

    trace!(
        "tiling {} samples over {samples} ({} repetitions)",
        quantized.len(),
        samples.div_ceil(quantized.len())
    );

    // sample_count saturates, so usize::MAX means the length didn't fit
    let too_long = || Error::InvalidDuration(length_s);
    let len = Some(samples)
        .filter(|&n| n != usize::MAX)
        .and_then(|n| n.checked_mul(BYTES_PER_SAMPLE))
        .ok_or_else(too_long)?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_long())?;
    data.resize(len, 0);
    for (chunk, sample) in data
        .chunks_exact_mut(BYTES_PER_SAMPLE)
        .zip(quantized.iter().cycle())
    {
        chunk.copy_from_slice(&sample.to_le_bytes());
    }

    Ok(data)
}
