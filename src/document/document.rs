use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentVersion, SourceUrl};

/// A fetched page handed to the engine by its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: SourceUrl,
    pub version: DocumentVersion,
    pub content_type: Option<String>,
    pub raw: Vec<u8>,
}

impl Document {
    /// Wrap already-retrieved bytes.
    ///
    /// The version is computed over the raw bytes, before any decoding, so two
    /// fetches of the same page share a version regardless of encoding issues.
    pub fn ingest(url: impl AsRef<str>, raw: Vec<u8>, content_type: Option<String>) -> Self {
        let version = DocumentVersion::from_content(&raw);

        Document {
            url: SourceUrl::new(url),
            version,
            content_type: content_type
                .map(|ct| ct.trim().to_ascii_lowercase())
                .filter(|ct| !ct.is_empty()),
            raw,
        }
    }

    pub fn from_html(url: impl AsRef<str>, html: &str) -> Self {
        Self::ingest(url, html.as_bytes().to_vec(), Some("text/html".to_string()))
    }

    /// Whether the bytes should go through the markup parser.
    ///
    /// A missing hint is treated as markup; fetched pages usually are.
    pub fn is_markup(&self) -> bool {
        match &self.content_type {
            None => true,
            Some(ct) => ct.contains("html") || ct.contains("xml"),
        }
    }
}
