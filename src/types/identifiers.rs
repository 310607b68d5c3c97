use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Originating URL of a fetched page.
///
/// The engine never dereferences it; it is carried into the report so callers
/// can correlate excerpts with their source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceUrl(String);

impl SourceUrl {
    pub fn new(raw: impl AsRef<str>) -> Self {
        SourceUrl(normalize_url(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trim surrounding whitespace and drop the fragment.
fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_fragment = match trimmed.find('#') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };

    without_fragment.to_string()
}

/// Content hash version of the raw input bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
