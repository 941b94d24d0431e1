use std::path::Path;
use std::time::Duration;

use vembed_audio::{preprocess, samples_in_duration, seconds, wav, PreprocessConfig};

use crate::model::EmbeddingModel;
use crate::{Embedding, EmbeddingError, StridedAverageModel};

/// Configures a [`Pipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Preprocessing applied before extraction.
    pub preprocess: PreprocessConfig,
    /// Minimum preprocessed length in samples (default: 80000 = 5s @ 16kHz).
    pub min_samples: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            min_samples: samples_in_duration(Duration::from_secs(5)),
        }
    }
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub embedding: Embedding,
    /// Number of samples the model saw, after preprocessing.
    pub samples: usize,
}

impl Extraction {
    /// Duration of the audio the model saw, at 16kHz.
    pub fn seconds(&self) -> f32 {
        seconds(self.samples)
    }
}

/// Decode -> preprocess -> length check -> extract.
///
/// Every stage fails fast; nothing is produced on error.
pub struct Pipeline {
    model: Box<dyn EmbeddingModel>,
    config: PipelineConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Box::new(StridedAverageModel::default()), PipelineConfig::default())
    }
}

impl Pipeline {
    pub fn new(model: Box<dyn EmbeddingModel>, config: PipelineConfig) -> Self {
        Self { model, config }
    }

    /// Decodes a WAV file and runs it through the pipeline.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<Extraction, EmbeddingError> {
        let pcm = wav::decode_file(path)?;
        self.run(pcm)
    }

    /// Runs already-decoded samples through the pipeline.
    pub fn run(&self, pcm: Vec<f32>) -> Result<Extraction, EmbeddingError> {
        let pcm = preprocess(pcm, &self.config.preprocess);
        if pcm.len() < self.config.min_samples {
            return Err(EmbeddingError::AudioTooShort {
                min_samples: self.config.min_samples,
                got_samples: pcm.len(),
            });
        }

        let embedding = Embedding::try_from(self.model.extract(&pcm)?)?;
        tracing::debug!(
            samples = pcm.len(),
            dim = self.model.dimension(),
            "extracted embedding"
        );
        Ok(Extraction {
            embedding,
            samples: pcm.len(),
        })
    }
}
