use std::ops::Deref;

use crate::EmbeddingError;

/// Number of coefficients in every embedding.
pub const EMBEDDING_DIM: usize = 256;

/// An immutable embedding of exactly [`EMBEDDING_DIM`] coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(pub(crate) Vec<f32>);

impl Embedding {
    /// Returns the coefficients.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consumes the embedding and returns the coefficients.
    pub fn into_vec(self) -> Vec<f32> {
        self.0
    }
}

impl TryFrom<Vec<f32>> for Embedding {
    type Error = EmbeddingError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        if values.len() != EMBEDDING_DIM {
            return Err(EmbeddingError::DimensionMismatch {
                expected: EMBEDDING_DIM,
                got: values.len(),
            });
        }
        Ok(Self(values))
    }
}

impl Deref for Embedding {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}
