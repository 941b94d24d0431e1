//! 16kHz mono PCM sample math.

use std::time::Duration;

/// Sample rate assumed by every duration threshold in the pipeline.
pub const SAMPLE_RATE: u32 = 16000;

/// Returns the number of samples in `duration` at [`SAMPLE_RATE`].
pub fn samples_in_duration(duration: Duration) -> usize {
    (SAMPLE_RATE as u128 * duration.as_millis() / 1000) as usize
}

/// Returns the length in seconds of `samples` samples at [`SAMPLE_RATE`].
pub fn seconds(samples: usize) -> f32 {
    samples as f32 / SAMPLE_RATE as f32
}

/// Converts a PCM16 sample to a float in [-1, 1).
#[inline]
pub fn i16_to_f32(s: i16) -> f32 {
    s as f32 / 32768.0
}
