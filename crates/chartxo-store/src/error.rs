use std::path::PathBuf;

use chartxo_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A persisted record exists but cannot be decoded.
    #[error("corrupt record {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The mutation needs a profile and none has been created yet.
    #[error("no user profile; complete onboarding first")]
    NoProfile,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
