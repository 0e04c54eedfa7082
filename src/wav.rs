use std::{fs, io::Write, path::Path};

use log::{info, trace};

use crate::{
    error::{Error, Result},
    format,
};

/// Size of the canonical RIFF/WAVE header preceding the PCM data.
pub const HEADER_LEN: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveDesc {
    channels: u16,
    samplerate: u32,
    bits_per_sample: u16,
}

impl Default for WaveDesc {
    fn default() -> Self {
        Self::from_data(format::CHANNELS, format::SAMPLE_RATE, format::BITS_PER_SAMPLE)
    }
}

impl WaveDesc {
    pub fn from_data(channels: u16, samplerate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels,
            samplerate,
            bits_per_sample,
        }
    }

    pub fn byte_rate(&self) -> u32 {
        self.samplerate * self.channels as u32 * self.bits_per_sample as u32 / 8
    }

    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Header for `data_len` bytes of PCM.
    pub fn header(&self, data_len: usize) -> Result<[u8; HEADER_LEN]> {
        let subchunk1_size: u32 = 16;
        let subchunk2_size = u32::try_from(data_len)
            .ok()
            .filter(|len| len.checked_add(4 + (8 + subchunk1_size) + 8).is_some())
            .ok_or(Error::PayloadTooLarge(data_len))?;

        let chunk_size: u32 = 4 + (8 + subchunk1_size) + (8 + subchunk2_size);

        trace!("wav header: chunk size {chunk_size}, data size {subchunk2_size}");

        let mut header = [0; HEADER_LEN];
        let mut w = &mut header[..];

        // ---------- RIFF descriptor ----------
        w.write_all(b"RIFF")?;

        w.write_all(&chunk_size.to_le_bytes())?;
        w.write_all(b"WAVE")?;

        // ---------- fmt chunk ----------
        w.write_all(b"fmt ")?;

        w.write_all(&subchunk1_size.to_le_bytes())?;

        // format = pcm
        w.write_all(&1u16.to_le_bytes())?;
        w.write_all(&self.channels.to_le_bytes())?;

        w.write_all(&self.samplerate.to_le_bytes())?;
        w.write_all(&self.byte_rate().to_le_bytes())?;
        w.write_all(&self.block_align().to_le_bytes())?;
        w.write_all(&self.bits_per_sample.to_le_bytes())?;

        // ---------- data chunk ----------
        w.write_all(b"data")?;
        w.write_all(&subchunk2_size.to_le_bytes())?;

        Ok(header)
    }

    pub fn write(&self, data: &[u8], mut w: impl Write) -> Result<()> {
        w.write_all(&self.header(data.len())?)?;
        w.write_all(data)?;

        Ok(())
    }
}

/// Prefix raw PCM with a mono 44.1 kHz 16-bit WAV header.
pub fn to_wav(data: &[u8]) -> Result<Vec<u8>> {
    let mut wav = Vec::with_capacity(HEADER_LEN + data.len());
    WaveDesc::default().write(data, &mut wav)?;

    Ok(wav)
}

/// Write `data` to `path` as is, creating missing parent directories.
pub fn save(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if path.file_name().is_none() {
        return Err(Error::InvalidPath(path.to_owned()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, data)?;
    info!("wrote {} bytes to {}", data.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn canonical_header() {
        let pcm = [1, 2, 3, 4, 5, 6];
        let wav = to_wav(&pcm).unwrap();

        assert_eq!(wav.len(), 44 + pcm.len());
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), pcm.len() as u32 + 36);
        assert_eq!(&wav[8..16], b"WAVEfmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(&wav[20..24], &[1, 0, 1, 0]);
        assert_eq!(u32_at(&wav, 24), 44100);
        assert_eq!(u32_at(&wav, 28), 88200);
        assert_eq!(&wav[32..36], &[2, 0, 16, 0]);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 40), pcm.len() as u32);
        assert_eq!(&wav[44..], &pcm);
    }

    #[test]
    fn headers_do_not_leak_between_calls() {
        let long = to_wav(&[0; 1000]).unwrap();
        let short = to_wav(&[]).unwrap();

        assert_eq!(u32_at(&long, 40), 1000);
        assert_eq!(short.len(), 44);
        assert_eq!(u32_at(&short, 4), 36);
        assert_eq!(u32_at(&short, 40), 0);

        assert_eq!(to_wav(&[7; 10]).unwrap(), to_wav(&[7; 10]).unwrap());
    }

    #[test]
    fn oversized_payload() {
        let desc = WaveDesc::default();
        assert!(desc.header(u32::MAX as usize - 36).is_ok());
        assert!(matches!(
            desc.header(u32::MAX as usize - 35),
            Err(Error::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.wav");

        save(&path, b"RIFF").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"RIFF");
    }

    #[test]
    fn save_rejects_paths_without_file_name() {
        assert!(matches!(save("", b""), Err(Error::InvalidPath(_))));
        assert!(matches!(save("/", b""), Err(Error::InvalidPath(_))));
        assert!(matches!(save("out/..", b""), Err(Error::InvalidPath(_))));
    }
}
