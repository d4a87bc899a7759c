//! Chart image payloads.
//!
//! The AI service takes raw base64 plus a MIME type; the UI and the history
//! store keep data URIs. This module converts between the two.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const BASE64_MARKER: &str = "base64,";

/// Base64-encoded image bytes plus MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Base64 without any `data:...;base64,` prefix.
    pub data: String,
    pub mime_type: String,
}

impl ImagePayload {
    /// Wrap base64 text, dropping a data-URI prefix if one is present.
    #[must_use]
    pub fn from_base64(data: &str, mime_type: impl Into<String>) -> Self {
        Self {
            data: clean_base64(data).to_string(),
            mime_type: mime_type.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the URI is not base64-encoded data.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::Validation("image is not a data URI".into()))?;
        let (meta, data) = rest
            .split_once(BASE64_MARKER)
            .ok_or_else(|| CoreError::Validation("data URI is not base64-encoded".into()))?;
        let mime_type = meta.trim_end_matches(';');
        if mime_type.is_empty() {
            return Err(CoreError::Validation("data URI has no MIME type".into()));
        }
        Ok(Self {
            data: data.to_string(),
            mime_type: mime_type.to_string(),
        })
    }

    /// Encode raw image bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Read an image file, inferring the MIME type from its extension.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for unsupported extensions and
    /// `CoreError::Other` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let mime_type = mime_for_path(path).ok_or_else(|| {
            CoreError::Validation(format!(
                "unsupported image type: {} (expected png, jpg, jpeg, webp, gif, heic)",
                path.display()
            ))
        })?;
        let bytes = std::fs::read(path).map_err(|e| {
            CoreError::Other(anyhow::anyhow!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Self::from_bytes(&bytes, mime_type))
    }

    /// Render as a data URI for storage and display.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};{BASE64_MARKER}{}", self.mime_type, self.data)
    }

    /// Whether the payload carries no image data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.trim().is_empty()
    }
}

/// Drop everything up to and including `base64,`, if present.
#[must_use]
pub fn clean_base64(data: &str) -> &str {
    data.split_once(BASE64_MARKER).map_or(data, |(_, rest)| rest)
}

/// Infer an image MIME type from a file extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
