use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vembed_audio::AudioError;

/// Errors returned by embedding operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error(transparent)]
    InvalidFormat(#[from] AudioError),

    #[error("audio too short: need at least {min_samples} samples, got {got_samples}")]
    AudioTooShort {
        min_samples: usize,
        got_samples: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid embedding file length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("cannot access embedding file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("checksum mismatch: expected {expected}, got {got}")]
    ChecksumMismatch { expected: String, got: String },

    #[error("model error: {0}")]
    Model(String),
}
