//! Raw binary embedding files.
//!
//! An embedding file is exactly `EMBEDDING_DIM * 4` bytes of little-endian
//! IEEE-754 f32, with no header or delimiter.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{Embedding, EmbeddingError, EMBEDDING_DIM};

/// Size of a serialized embedding in bytes.
pub const FILE_LEN: usize = EMBEDDING_DIM * 4;

/// Serializes an embedding to little-endian f32 bytes.
pub fn to_bytes(embedding: &Embedding) -> Vec<u8> {
    let mut out = Vec::with_capacity(FILE_LEN);
    for v in embedding.iter() {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Parses little-endian f32 bytes back into an embedding.
pub fn from_bytes(data: &[u8]) -> Result<Embedding, EmbeddingError> {
    if data.len() != FILE_LEN {
        return Err(EmbeddingError::InvalidLength {
            expected: FILE_LEN,
            got: data.len(),
        });
    }
    let values = data
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect::<Vec<_>>();
    Embedding::try_from(values)
}

/// Writes the embedding to `path`, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, embedding: &Embedding) -> Result<(), EmbeddingError> {
    let path = path.as_ref();
    std::fs::write(path, to_bytes(embedding)).map_err(|source| EmbeddingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = FILE_LEN, "wrote embedding");
    Ok(())
}

/// Reads an embedding file written by [`write_file`].
pub fn read_file(path: impl AsRef<Path>) -> Result<Embedding, EmbeddingError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| EmbeddingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_bytes(&data)
}

/// Reads an embedding file and checks it against a [`checksum`] digest.
pub fn read_file_verified(
    path: impl AsRef<Path>,
    expected: &str,
) -> Result<Embedding, EmbeddingError> {
    let embedding = read_file(path)?;
    let got = checksum(&embedding);
    if !got.eq_ignore_ascii_case(expected) {
        return Err(EmbeddingError::ChecksumMismatch {
            expected: expected.to_string(),
            got,
        });
    }
    Ok(embedding)
}

/// Returns the lowercase hex SHA-256 digest of the serialized embedding.
pub fn checksum(embedding: &Embedding) -> String {
    hex::encode(Sha256::digest(to_bytes(embedding)))
}

/// Blends two embeddings: `a * (1 - blend) + b * blend`.
///
/// `blend` is clamped to [0, 1].
pub fn morph(a: &Embedding, b: &Embedding, blend: f32) -> Embedding {
    let t = blend.clamp(0.0, 1.0);
    Embedding(
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x * (1.0 - t) + y * t)
            .collect(),
    )
}
