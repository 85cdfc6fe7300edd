// ABOUTME: Code artifacts: the blue and green build payloads.
// ABOUTME: Each artifact is read once and consumed by value by a publish call.

use bytes::Bytes;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which half of the rollout an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {color} artifact {path}: {source}")]
    Unreadable {
        color: Color,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{color} artifact {path} is empty")]
    Empty { color: Color, path: PathBuf },
}

/// One color's build output, immutable once read.
#[derive(Debug, Clone)]
pub struct CodeArtifact {
    color: Color,
    bytes: Bytes,
}

impl CodeArtifact {
    /// Read the artifact from disk. Called exactly once per color per run.
    pub async fn read(color: Color, path: &Path) -> Result<Self, ArtifactError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ArtifactError::Unreadable {
                color,
                path: path.to_path_buf(),
                source,
            })?;

        if bytes.is_empty() {
            return Err(ArtifactError::Empty {
                color,
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            color,
            bytes: Bytes::from(bytes),
        })
    }

    /// Construct an artifact from an in-memory payload.
    pub fn from_bytes(color: Color, bytes: impl Into<Bytes>) -> Self {
        Self {
            color,
            bytes: bytes.into(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the artifact, yielding its payload.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}
