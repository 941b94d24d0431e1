//! Canonical 44-byte header WAV decoding.
//!
//! Only the simplest RIFF layout is understood: a `fmt ` chunk of 16 bytes
//! followed directly by the `data` chunk. Files with extra chunks (LIST,
//! fact, ...) before `data` are rejected.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::AudioError;
use crate::pcm::{i16_to_f32, SAMPLE_RATE};

/// Size of the canonical PCM WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub riff: [u8; 4],
    pub file_size: u32,
    pub wave: [u8; 4],
    pub fmt: [u8; 4],
    pub fmt_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data: [u8; 4],
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the raw header bytes. Performs no validation.
    pub fn parse(b: &[u8; HEADER_LEN]) -> Self {
        let tag = |o: usize| [b[o], b[o + 1], b[o + 2], b[o + 3]];
        let u32_at = |o: usize| u32::from_le_bytes(tag(o));
        let u16_at = |o: usize| u16::from_le_bytes([b[o], b[o + 1]]);
        Self {
            riff: tag(0),
            file_size: u32_at(4),
            wave: tag(8),
            fmt: tag(12),
            fmt_size: u32_at(16),
            audio_format: u16_at(20),
            num_channels: u16_at(22),
            sample_rate: u32_at(24),
            byte_rate: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data: tag(36),
            data_size: u32_at(40),
        }
    }

    /// Checks chunk tags and the sample layout.
    pub fn validate(&self) -> Result<(), AudioError> {
        if &self.riff != b"RIFF" || &self.wave != b"WAVE" {
            return Err(AudioError::InvalidHeader("missing RIFF/WAVE tags".into()));
        }
        if &self.fmt != b"fmt " || &self.data != b"data" {
            return Err(AudioError::InvalidHeader(
                "expected canonical fmt/data chunk layout".into(),
            ));
        }
        if self.bits_per_sample != 16 || self.num_channels != 1 {
            return Err(AudioError::Unsupported {
                bits_per_sample: self.bits_per_sample,
                num_channels: self.num_channels,
            });
        }
        Ok(())
    }
}

/// Decodes a WAV file into f32 samples in [-1, 1].
///
/// The file handle is dropped before returning on every path.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<f32>, AudioError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_reader(BufReader::new(file))
}

/// Decodes an in-memory WAV file.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<f32>, AudioError> {
    decode_reader(data)
}

/// Decodes WAV data from a reader.
///
/// Reads the 44-byte header, then exactly `data_size` bytes of PCM16.
/// Anything after the data chunk is left unread. A trailing odd byte is
/// ignored.
pub fn decode_reader<R: Read>(mut r: R) -> Result<Vec<f32>, AudioError> {
    let mut raw = [0u8; HEADER_LEN];
    r.read_exact(&mut raw).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            AudioError::InvalidHeader(format!("header shorter than {HEADER_LEN} bytes"))
        }
        _ => AudioError::Read(e),
    })?;

    let header = WavHeader::parse(&raw);
    header.validate()?;

    if header.sample_rate != SAMPLE_RATE {
        tracing::debug!(
            sample_rate = header.sample_rate,
            "header sample rate differs from {SAMPLE_RATE} Hz; durations assume {SAMPLE_RATE} Hz"
        );
    }

    let expected = header.data_size as usize;
    // data_size is untrusted; let the buffer grow with what is actually read.
    let mut payload = Vec::new();
    r.take(header.data_size as u64)
        .read_to_end(&mut payload)
        .map_err(AudioError::Read)?;
    if payload.len() < expected {
        return Err(AudioError::Truncated {
            expected,
            got: payload.len(),
        });
    }

    let samples: Vec<f32> = payload
        .chunks_exact(2)
        .map(|b| i16_to_f32(i16::from_le_bytes([b[0], b[1]])))
        .collect();

    tracing::debug!(
        samples = samples.len(),
        sample_rate = header.sample_rate,
        "decoded wav"
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes(samples: &[i16], sample_rate: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut w = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                w.write_sample(s).unwrap();
            }
            w.finalize().unwrap();
        }
        cursor.into_inner()
    }

    fn set_u16(bytes: &mut [u8], offset: usize, v: u16) {
        bytes[offset..offset + 2].copy_from_slice(&v.to_le_bytes());
    }

    fn set_u32(bytes: &mut [u8], offset: usize, v: u32) {
        bytes[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
    }

    #[test]
    fn header_layout() {
        let bytes = wav_bytes(&[1, 2, 3], 16000);
        assert_eq!(bytes.len(), HEADER_LEN + 6);

        let raw: [u8; HEADER_LEN] = bytes[..HEADER_LEN].try_into().unwrap();
        let h = WavHeader::parse(&raw);
        assert_eq!(&h.riff, b"RIFF");
        assert_eq!(&h.wave, b"WAVE");
        assert_eq!(&h.fmt, b"fmt ");
        assert_eq!(&h.data, b"data");
        assert_eq!(h.file_size, 42);
        assert_eq!(h.fmt_size, 16);
        assert_eq!(h.audio_format, 1);
        assert_eq!(h.num_channels, 1);
        assert_eq!(h.sample_rate, 16000);
        assert_eq!(h.byte_rate, 32000);
        assert_eq!(h.block_align, 2);
        assert_eq!(h.bits_per_sample, 16);
        assert_eq!(h.data_size, 6);
        h.validate().unwrap();
    }

    #[test]
    fn decode_scales_samples() {
        let bytes = wav_bytes(&[0, 16384, -32768, 32767], 16000);
        let pcm = decode_bytes(&bytes).unwrap();
        assert_eq!(pcm.len(), 4);
        assert_eq!(pcm[0], 0.0);
        assert_eq!(pcm[1], 0.5);
        assert_eq!(pcm[2], -1.0);
        assert!((pcm[3] - 32767.0 / 32768.0).abs() < 1e-7);
    }

    #[test]
    fn decode_ignores_bytes_past_data_size() {
        let mut bytes = wav_bytes(&[100, 200], 16000);
        bytes.extend_from_slice(b"LIST\x04\x00\x00\x00junk");
        assert_eq!(decode_bytes(&bytes).unwrap().len(), 2);
    }

    #[test]
    fn decode_ignores_odd_trailing_byte() {
        let mut bytes = wav_bytes(&[100, 200], 16000);
        set_u32(&mut bytes, 40, 5);
        bytes.push(0x7f);
        assert_eq!(decode_bytes(&bytes).unwrap().len(), 2);
    }

    #[test]
    fn decode_empty_payload() {
        let bytes = wav_bytes(&[], 16000);
        assert!(decode_bytes(&bytes).unwrap().is_empty());
    }

    #[test]
    fn accepts_other_sample_rates() {
        let bytes = wav_bytes(&[1000; 10], 44100);
        assert_eq!(decode_bytes(&bytes).unwrap().len(), 10);
    }

    #[test]
    fn rejects_bad_riff_tag() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        bytes[0..4].copy_from_slice(b"RIFX");
        assert!(matches!(
            decode_bytes(&bytes),
            Err(AudioError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_bad_wave_tag() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        bytes[8..12].copy_from_slice(b"AVI ");
        assert!(matches!(
            decode_bytes(&bytes),
            Err(AudioError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_extra_chunk_before_data() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        bytes[36..40].copy_from_slice(b"LIST");
        assert!(matches!(
            decode_bytes(&bytes),
            Err(AudioError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_stereo() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        set_u16(&mut bytes, 22, 2);
        assert!(matches!(
            decode_bytes(&bytes),
            Err(AudioError::Unsupported {
                bits_per_sample: 16,
                num_channels: 2
            })
        ));
    }

    #[test]
    fn rejects_8bit() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        set_u16(&mut bytes, 34, 8);
        assert!(matches!(
            decode_bytes(&bytes),
            Err(AudioError::Unsupported {
                bits_per_sample: 8,
                num_channels: 1
            })
        ));
    }

    #[test]
    fn rejects_short_header() {
        let bytes = wav_bytes(&[1, 2], 16000);
        assert!(matches!(
            decode_bytes(&bytes[..30]),
            Err(AudioError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_truncated_payload() {
        let bytes = wav_bytes(&[1, 2, 3, 4], 16000);
        assert!(matches!(
            decode_bytes(&bytes[..HEADER_LEN + 5]),
            Err(AudioError::Truncated {
                expected: 8,
                got: 5
            })
        ));
    }

    #[test]
    fn huge_declared_size_reports_truncation() {
        let mut bytes = wav_bytes(&[1, 2], 16000);
        set_u32(&mut bytes, 40, u32::MAX);
        match decode_bytes(&bytes) {
            Err(AudioError::Truncated { expected, got }) => {
                assert_eq!(expected, u32::MAX as usize);
                assert_eq!(got, 4);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn decode_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            decode_file(dir.path().join("absent.wav")),
            Err(AudioError::Open { .. })
        ));
    }

    #[test]
    fn decode_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        std::fs::write(&path, wav_bytes(&[8192; 160], 16000)).unwrap();
        let pcm = decode_file(&path).unwrap();
        assert_eq!(pcm.len(), 160);
        assert!(pcm.iter().all(|s| *s == 0.25));
    }
}
