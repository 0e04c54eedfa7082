//! Waveform generation.
//!
//! Every generator produces exactly one period of its waveform at the given
//! frequency. Longer sounds are made by tiling that period, see [`crate::pcm`].

use std::f64::consts::TAU;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{Error, Result},
    format::SAMPLE_RATE,
    note::NoteSpec,
    pcm,
};

pub const DEFAULT_DUTY_CYCLE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    /// `duty_cycle` is the percentage (1-100) of the period spent high.
    Pulse { duty_cycle: u8 },
    Noise,
}

impl Waveform {
    pub fn pulse() -> Self {
        Waveform::Pulse {
            duty_cycle: DEFAULT_DUTY_CYCLE,
        }
    }
}

impl std::str::FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "sine" => Waveform::Sine,
            "tri" | "triangle" => Waveform::Triangle,
            "saw" | "sawtooth" => Waveform::Sawtooth,
            "pulse" | "square" => Waveform::pulse(),
            "noise" => Waveform::Noise,

            _ => return Err(Error::UnknownWaveform(s.to_owned())),
        })
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Waveform::Sine => write!(f, "sine"),
            Waveform::Triangle => write!(f, "triangle"),
            Waveform::Sawtooth => write!(f, "sawtooth"),
            Waveform::Pulse { duty_cycle } => write!(f, "pulse ({duty_cycle}%)"),
            Waveform::Noise => write!(f, "noise"),
        }
    }
}

/// Number of samples in one period of `freq`.
///
/// Fails unless `0 < freq < SAMPLE_RATE`, which guarantees a period of at
/// least one sample.
pub fn period(freq: f64) -> Result<usize> {
    let sample_rate = SAMPLE_RATE as f64;

    // also rejects NaN
    if !(freq > 0. && freq < sample_rate) {
        return Err(Error::InvalidFrequency(freq));
    }

    Ok((sample_rate / freq) as usize)
}

pub fn clamp_amplitude(amplitude: f64) -> f64 {
    if amplitude.is_nan() {
        0.
    } else {
        amplitude.clamp(0., 1.)
    }
}

/// Validated period and amplitude, plus the sample positions of one period.
fn setup(freq: f64, amplitude: f64) -> Result<(usize, f64, impl Iterator<Item = f64>)> {
    let period = period(freq)?;

    Ok((
        period,
        clamp_amplitude(amplitude),
        (0..period).map(|t| t as f64),
    ))
}

pub fn sine(freq: f64, amplitude: f64) -> Result<Vec<f64>> {
    let (_, amplitude, t) = setup(freq, amplitude)?;

    Ok(t.map(|phase| amplitude * f64::sin(TAU * freq * phase / SAMPLE_RATE as f64))
        .collect())
}

/// A triangle that starts just below `-amplitude` and peaks just below
/// `+amplitude` mid-period.
pub fn triangle(freq: f64, amplitude: f64) -> Result<Vec<f64>> {
    let (period, amplitude, t) = setup(freq, amplitude)?;
    let half = period as f64 / 2.;

    Ok(t.map(|phase| (amplitude / half) * (half - (phase - half).abs() * 2. - 1.))
        .collect())
}

pub fn sawtooth(freq: f64, amplitude: f64) -> Result<Vec<f64>> {
    let (_, amplitude, t) = setup(freq, amplitude)?;

    Ok(t.map(|phase| amplitude * (freq * (phase / SAMPLE_RATE as f64) * 2. - 1.))
        .collect())
}

pub fn pulse(freq: f64, amplitude: f64, duty_cycle: u8) -> Result<Vec<f64>> {
    if !(1..=100).contains(&duty_cycle) {
        return Err(Error::InvalidDutyCycle(duty_cycle));
    }

    let (period, amplitude, _) = setup(freq, amplitude)?;
    let threshold = duty_cycle as usize * period / 100;

    Ok((0..period)
        .map(|t| if t < threshold { amplitude } else { -amplitude })
        .collect())
}

/// One period worth of uniform white noise drawn from `rng`.
pub fn noise<R: Rng>(rng: &mut R, freq: f64, amplitude: f64) -> Result<Vec<f64>> {
    let (period, amplitude, _) = setup(freq, amplitude)?;

    Ok((0..period)
        .map(|_| amplitude * rng.gen_range(-1.0..1.0))
        .collect())
}

/// Everything needed to render one sound.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformRequest {
    pub waveform: Waveform,
    pub note: NoteSpec,
    /// Clamped to `0..=1`.
    pub amplitude: f64,
    /// Seconds.
    pub length: f64,
}

/// Renders waveforms to PCM.
///
/// The only state is the random stream used for noise, so a synthesizer
/// should not be shared between threads. Create one per thread instead.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    rng: StdRng,
}

impl Synthesizer {
    /// A synthesizer whose noise is seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A synthesizer with reproducible noise.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One period of `waveform` at `freq`.
    pub fn cycle(&mut self, waveform: Waveform, freq: f64, amplitude: f64) -> Result<Vec<f64>> {
        match waveform {
            Waveform::Sine => sine(freq, amplitude),
            Waveform::Triangle => triangle(freq, amplitude),
            Waveform::Sawtooth => sawtooth(freq, amplitude),
            Waveform::Pulse { duty_cycle } => pulse(freq, amplitude, duty_cycle),
            Waveform::Noise => noise(&mut self.rng, freq, amplitude),
        }
    }

    /// Raw 16-bit PCM for `req`, without a WAV header.
    pub fn render(&mut self, req: &WaveformRequest) -> Result<Vec<u8>> {
        let freq = req.note.resolve()?;
        let cycle = self.cycle(req.waveform, freq, req.amplitude)?;

        debug!(
            "rendering {} at {} ({freq} Hz): period {}, {} s",
            req.waveform,
            req.note,
            cycle.len(),
            req.length
        );

        pcm::pack(&cycle, req.length)
    }

    fn render_with(
        &mut self,
        waveform: Waveform,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
    ) -> Result<Vec<u8>> {
        self.render(&WaveformRequest {
            waveform,
            note: note.into(),
            amplitude,
            length,
        })
    }

    pub fn sine(
        &mut self,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
    ) -> Result<Vec<u8>> {
        self.render_with(Waveform::Sine, note, amplitude, length)
    }

    pub fn triangle(
        &mut self,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
    ) -> Result<Vec<u8>> {
        self.render_with(Waveform::Triangle, note, amplitude, length)
    }

    pub fn sawtooth(
        &mut self,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
    ) -> Result<Vec<u8>> {
        self.render_with(Waveform::Sawtooth, note, amplitude, length)
    }

    pub fn pulse(
        &mut self,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
        duty_cycle: u8,
    ) -> Result<Vec<u8>> {
        self.render_with(Waveform::Pulse { duty_cycle }, note, amplitude, length)
    }

    pub fn noise(
        &mut self,
        note: impl Into<NoteSpec>,
        amplitude: f64,
        length: f64,
    ) -> Result<Vec<u8>> {
        self.render_with(Waveform::Noise, note, amplitude, length)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
