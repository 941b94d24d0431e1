//! Fixed-size audio embeddings for downstream matching and classification.
//!
//! # Architecture
//!
//! The pipeline is a single linear pass:
//!
//! 1. [`vembed_audio::wav::decode_file`]: WAV -> f32 samples
//! 2. [`vembed_audio::preprocess()`]: normalize, trim silence, cap at 30s
//! 3. [`EmbeddingModel::extract`]: samples -> 256-dim vector
//! 4. [`store::write_file`]: vector -> 1024 bytes of little-endian f32
//!
//! [`Pipeline`] wires stages 1-3 together and enforces the 5 second
//! minimum before the model is invoked.
//!
//! # Models
//!
//! [`EmbeddingModel`] is the seam for inference backends. The crate ships
//! [`StridedAverageModel`], a deterministic placeholder that averages
//! every 256th sample.

mod embedding;
mod error;
mod model;
mod pipeline;
pub mod store;
mod strided;

pub use embedding::{Embedding, EMBEDDING_DIM};
pub use error::EmbeddingError;
pub use model::EmbeddingModel;
pub use pipeline::{Extraction, Pipeline, PipelineConfig};
pub use store::{checksum, morph};
pub use strided::StridedAverageModel;
