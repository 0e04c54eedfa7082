use std::path::PathBuf;

use anyhow::Context;
use chipwave::{wav, NoteSpec, Synthesizer, Waveform, WaveformRequest};
use structopt::StructOpt;

const C_SCALE: [&str; 8] = ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"];

#[derive(Debug, StructOpt)]
#[structopt(name = "chipwave", about = "Render chiptune notes to a WAV file")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// sine, triangle, sawtooth, pulse or noise.
    #[structopt(short, long, default_value = "sawtooth")]
    waveform: Waveform,

    /// Between 0 and 1, out of range values are clamped.
    #[structopt(short, long, default_value = "0.1")]
    amplitude: f64,

    /// Seconds per note.
    #[structopt(short, long, default_value = "0.5")]
    length: f64,

    /// Percentage of each pulse period spent high.
    #[structopt(long, default_value = "50")]
    duty_cycle: u8,

    /// Seed for noise, random if not given.
    #[structopt(long)]
    seed: Option<u64>,

    /// Write headerless PCM instead of a WAV file.
    #[structopt(long)]
    raw: bool,

    #[structopt(short, long, parse(from_os_str), default_value = "c_scale.wav")]
    output: PathBuf,

    /// Note names (C4, F#3, ...) or frequencies in Hz. Plays a C major scale if empty.
    notes: Vec<NoteSpec>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let mut synth = match opt.seed {
        Some(seed) => Synthesizer::with_seed(seed),
        None => Synthesizer::new(),
    };

    let waveform = match opt.waveform {
        Waveform::Pulse { .. } => Waveform::Pulse {
            duty_cycle: opt.duty_cycle,
        },
        w => w,
    };

    let notes = if opt.notes.is_empty() {
        C_SCALE.iter().map(|&n| NoteSpec::from(n)).collect()
    } else {
        opt.notes
    };

    let mut data = vec![];
    for note in notes {
        let req = WaveformRequest {
            waveform,
            note,
            amplitude: opt.amplitude,
            length: opt.length,
        };

        let pcm = synth
            .render(&req)
            .with_context(|| format!("Couldn't render {}", req.note))?;
        data.extend(pcm);
    }

    if !opt.raw {
        data = wav::to_wav(&data)?;
    }

    wav::save(&opt.output, &data)
        .with_context(|| format!("Couldn't write {}", opt.output.display()))
}
