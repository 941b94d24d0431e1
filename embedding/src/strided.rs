//! Strided-average placeholder model.

use crate::model::EmbeddingModel;
use crate::{EmbeddingError, EMBEDDING_DIM};

/// Deterministic placeholder [`EmbeddingModel`].
///
/// Coefficient `i` is the sum of samples `i, i + dim, i + 2*dim, ...`
/// divided by `floor(len / dim)`. Accumulation is in f32 and in index
/// order so results are bit-reproducible. When the buffer is shorter than
/// `dim` every coefficient is zero.
///
/// Content-sensitive but not semantically meaningful; stands in until a
/// real inference backend is plugged in.
#[derive(Debug, Clone)]
pub struct StridedAverageModel {
    dim: usize,
}

impl StridedAverageModel {
    /// Creates a model producing `dim` coefficients.
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "embedding: dim must be positive");
        Self { dim }
    }
}

impl Default for StridedAverageModel {
    fn default() -> Self {
        Self::new(EMBEDDING_DIM)
    }
}

impl EmbeddingModel for StridedAverageModel {
    fn extract(&self, pcm: &[f32]) -> Result<Vec<f32>, EmbeddingError> {
        let mut out = vec![0.0f32; self.dim];
        let count = pcm.len() / self.dim;
        if count == 0 {
            return Ok(out);
        }

        let divisor = count as f32;
        for (i, coef) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for s in pcm.iter().skip(i).step_by(self.dim) {
                sum += *s;
            }
            *coef = sum / divisor;
        }
        Ok(out)
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension() {
        assert_eq!(StridedAverageModel::default().dimension(), 256);
        assert_eq!(StridedAverageModel::new(8).dimension(), 8);
    }

    #[test]
    fn constant_signal_averages_to_constant() {
        let model = StridedAverageModel::default();
        let emb = model.extract(&vec![0.5; 96000]).unwrap();
        assert_eq!(emb.len(), 256);
        assert!(emb.iter().all(|v| *v == 0.5));
    }

    #[test]
    fn strided_positions() {
        // dim 4 over 0..10: count = 2.
        // i=0: 0+4+8 = 12, i=1: 1+5+9 = 15, i=2: 2+6 = 8, i=3: 3+7 = 10.
        let pcm: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let emb = StridedAverageModel::new(4).extract(&pcm).unwrap();
        assert_eq!(emb, vec![6.0, 7.5, 4.0, 5.0]);
    }

    #[test]
    fn short_buffer_yields_zeros() {
        let emb = StridedAverageModel::default().extract(&[1.0; 100]).unwrap();
        assert_eq!(emb, vec![0.0; 256]);
    }

    #[test]
    fn empty_buffer_yields_zeros() {
        let emb = StridedAverageModel::default().extract(&[]).unwrap();
        assert_eq!(emb, vec![0.0; 256]);
    }

    #[test]
    fn deterministic_bits() {
        let pcm: Vec<f32> = (0..100_000).map(|i| ((i as f32) * 0.013).sin()).collect();
        let model = StridedAverageModel::default();
        let a = model.extract(&pcm).unwrap();
        let b = model.extract(&pcm).unwrap();
        let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn content_sensitive() {
        let model = StridedAverageModel::default();
        let a = model.extract(&vec![0.5; 1024]).unwrap();
        let b = model.extract(&vec![-0.5; 1024]).unwrap();
        assert_ne!(a, b);
    }
}
