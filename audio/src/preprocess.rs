//! Peak normalization, silence trimming and duration capping.

use std::time::Duration;

use crate::pcm::samples_in_duration;

/// Configures [`preprocess`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Absolute amplitude below which edge samples count as silence (default: 0.01).
    pub silence_threshold: f32,
    /// Maximum samples kept after trimming (default: 480000 = 30s @ 16kHz).
    pub max_samples: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            silence_threshold: 0.01,
            max_samples: samples_in_duration(Duration::from_secs(30)),
        }
    }
}

/// Runs normalize -> trim -> truncate and returns the bounded buffer.
pub fn preprocess(mut pcm: Vec<f32>, cfg: &PreprocessConfig) -> Vec<f32> {
    let input_len = pcm.len();
    let peak = normalize(&mut pcm);

    let (start, end) = silence_bounds(&pcm, cfg.silence_threshold);
    pcm.truncate(end);
    pcm.drain(..start);

    let trimmed_len = pcm.len();
    truncate(&mut pcm, cfg.max_samples);

    tracing::debug!(
        input = input_len,
        peak,
        trimmed_start = start,
        trimmed_end = end,
        trimmed = trimmed_len,
        output = pcm.len(),
        "preprocessed audio"
    );
    pcm
}

/// Scales the buffer so its peak absolute value is 1.0.
///
/// Returns the peak found before scaling. Empty and all-zero buffers are
/// left untouched.
pub fn normalize(pcm: &mut [f32]) -> f32 {
    let peak = pcm.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if peak > 0.0 {
        for s in pcm.iter_mut() {
            *s /= peak;
        }
    }
    peak
}

/// Returns the sub-slice with leading and trailing near-silence removed.
pub fn trim_silence(pcm: &[f32], threshold: f32) -> &[f32] {
    let (start, end) = silence_bounds(pcm, threshold);
    &pcm[start..end]
}

/// Caps the buffer at `max_samples`, dropping the tail.
pub fn truncate(pcm: &mut Vec<f32>, max_samples: usize) {
    pcm.truncate(max_samples);
}

fn silence_bounds(pcm: &[f32], threshold: f32) -> (usize, usize) {
    let mut start = 0;
    while start < pcm.len() && pcm[start].abs() < threshold {
        start += 1;
    }
    let mut end = pcm.len();
    while end > start && pcm[end - 1].abs() < threshold {
        end -= 1;
    }
    (start, end)
}
