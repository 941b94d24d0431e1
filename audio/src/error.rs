use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while decoding WAV input.
///
/// Every variant means the input is not a usable 16-bit mono WAV file.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("cannot open audio file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid WAV file: {0}")]
    InvalidHeader(String),

    #[error("unsupported WAV format: need 16-bit mono, got {bits_per_sample}-bit with {num_channels} channel(s)")]
    Unsupported {
        bits_per_sample: u16,
        num_channels: u16,
    },

    #[error("truncated WAV data: header declares {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("read audio data")]
    Read(#[source] io::Error),
}
