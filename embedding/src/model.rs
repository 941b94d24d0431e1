use crate::EmbeddingError;

/// Extracts embedding vectors from preprocessed audio.
///
/// The input is f32 PCM in [-1, 1] at 16kHz mono, already normalized,
/// trimmed and capped by [`vembed_audio::preprocess()`]. The output is a
/// dense f32 vector whose dimensionality is returned by
/// [`EmbeddingModel::dimension`].
///
/// Inference backends implement this trait; the pipeline never depends on
/// a specific engine. The model artifact (e.g. an `.onnx` file) is the
/// implementation's own concern.
///
/// # Thread Safety
///
/// Implementations must be safe for concurrent use.
pub trait EmbeddingModel: Send + Sync {
    /// Computes an embedding from preprocessed samples.
    fn extract(&self, pcm: &[f32]) -> Result<Vec<f32>, EmbeddingError>;

    /// Returns the dimensionality of the embedding vectors (e.g., 256).
    fn dimension(&self) -> usize;
}
