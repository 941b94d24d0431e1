//! WAV decoding and PCM preprocessing for embedding extraction.
//!
//! The crate covers the front half of the embedding pipeline:
//!
//! 1. [`wav::decode_file`]: canonical 44-byte header WAV -> f32 samples in [-1, 1]
//! 2. [`preprocess::preprocess`]: peak normalization, silence trim, duration cap
//!
//! # Audio Requirements
//!
//! - Format: PCM16 signed little-endian
//! - Channels: 1 (mono)
//! - Header: canonical 44 bytes, `data` chunk immediately after `fmt `
//!
//! Sample counts are interpreted at [`SAMPLE_RATE`] regardless of the rate
//! declared in the header.

mod error;
pub mod pcm;
pub mod preprocess;
pub mod wav;

pub use error::AudioError;
pub use pcm::{i16_to_f32, samples_in_duration, seconds, SAMPLE_RATE};
pub use preprocess::{normalize, preprocess, trim_silence, truncate, PreprocessConfig};
pub use wav::{WavHeader, HEADER_LEN};
