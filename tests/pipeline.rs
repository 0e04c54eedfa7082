// End to end: note name in, WAV bytes out

use chipwave::{wav, Error, NoteSpec, Synthesizer, Waveform, WaveformRequest};

fn unpack(data: &[u8]) -> Vec<i16> {
    data.chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

#[test]
fn test_c_scale_to_wav() {
    let mut synth = Synthesizer::with_seed(0);

    let mut data = vec![];
    for note in ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"] {
        data.extend(synth.sawtooth(note, 0.1, 0.5).unwrap());
    }
    assert_eq!(data.len(), 8 * 22050 * 2);

    let file = wav::to_wav(&data).unwrap();
    assert_eq!(file.len(), 44 + data.len());
    assert_eq!(u32_at(&file, 4), data.len() as u32 + 36);
    assert_eq!(u32_at(&file, 40), data.len() as u32);
    assert_eq!(&file[44..], &data[..]);
}

#[test]
fn test_pulse_pcm_layout() {
    let mut synth = Synthesizer::with_seed(0);
    let data = unpack(&synth.pulse(100.0, 1.0, 0.1, 50).unwrap());

    // 4410 samples, ten full periods of 441
    assert_eq!(data.len(), 4410);
    for (i, &sample) in data.iter().enumerate() {
        let expected = if i % 441 < 220 { i16::MAX } else { -i16::MAX };
        assert_eq!(sample, expected, "sample {i}");
    }
}

#[test]
fn test_every_waveform_renders() {
    let mut synth = Synthesizer::with_seed(3);

    for waveform in ["sine", "triangle", "sawtooth", "pulse", "noise"] {
        let req = WaveformRequest {
            waveform: waveform.parse().unwrap(),
            note: NoteSpec::from("A3"),
            amplitude: 0.5,
            length: 0.25,
        };

        let data = synth.render(&req).unwrap();
        assert_eq!(data.len(), 11025 * 2, "{waveform}");
        assert!(
            unpack(&data).iter().any(|&s| s != 0),
            "{waveform} should not be silent"
        );
    }
}

#[test]
fn test_seeded_noise_is_reproducible() {
    let a = Synthesizer::with_seed(99).noise("E2", 0.7, 0.2).unwrap();
    let b = Synthesizer::with_seed(99).noise("E2", 0.7, 0.2).unwrap();
    assert_eq!(a, b);

    let req = WaveformRequest {
        waveform: Waveform::Noise,
        note: NoteSpec::from("E2"),
        amplitude: 0.7,
        length: 0.2,
    };
    assert_eq!(Synthesizer::with_seed(99).render(&req).unwrap(), a);
}

#[test]
fn test_errors_fail_fast() {
    let mut synth = Synthesizer::with_seed(0);

    assert!(matches!(synth.sine("Db4", 0.5, 1.0), Err(Error::InvalidNote(_))));
    assert!(matches!(synth.sine(0.0, 0.5, 1.0), Err(Error::InvalidFrequency(_))));
    assert!(matches!(
        synth.sine(96000.0, 0.5, 1.0),
        Err(Error::InvalidFrequency(_))
    ));
    assert!(matches!(
        synth.pulse("A4", 0.5, 1.0, 0),
        Err(Error::InvalidDutyCycle(0))
    ));
    assert!(matches!(
        synth.triangle("A4", 0.5, -1.0),
        Err(Error::InvalidDuration(_))
    ));
}

#[test]
fn test_save_wav_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/a4.wav");

    let data = wav::to_wav(&Synthesizer::new().sine("A4", 0.5, 0.1).unwrap()).unwrap();
    wav::save(&path, &data).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), data);
}
