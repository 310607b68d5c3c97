use serde::{Deserialize, Serialize};

use crate::document::hints::StructuralHint;
use crate::types::identifiers::{DocumentVersion, SourceUrl};

/// The engine's externally visible output for one page.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub title: String,
    /// Title line plus ranked sentences, never longer than the excerpt budget.
    pub body: String,
    pub truncated: bool,
}

/// Outcome of an extraction. `Empty` is a normal, representable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Extraction {
    Extracted(ExtractedContent),
    Empty { reason: EmptyReason },
}

impl Extraction {
    pub fn content(&self) -> Option<&ExtractedContent> {
        match self {
            Extraction::Extracted(content) => Some(content),
            Extraction::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty { .. })
    }
}

/// Why no excerpt could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    #[error("no text above the minimum thresholds remained")]
    NoUsableText,

    #[error("processing deadline exceeded")]
    DeadlineExceeded,

    #[error("extraction cancelled by caller")]
    Cancelled,
}

/// Non-fatal conditions a stage absorbed through its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    #[error("input exceeded the byte limit and was cut")]
    InputTruncated,

    #[error("input was not valid UTF-8 and was decoded lossily")]
    InvalidUtf8,

    #[error("markup could not be parsed structurally; tags were stripped")]
    ParseDegraded,

    #[error("no structural hint matched a substantial region; used the document body")]
    NoRegionFound,

    #[error("no sentence carried a salience signal; used the leading sentences")]
    NoSalientContent,
}

/// Where the region text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionSource {
    /// An element accepted under the hint at `priority` (0 = most specific).
    Hint { priority: usize, hint: StructuralHint },
    DocumentBody,
    StrippedMarkup,
    PlainText,
    /// The invocation stopped before region selection.
    NotReached,
}

/// Which tier of the sentence selection policy applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    Salient,
    Leading,
    Nothing,
}

/// Diagnostics describing how the excerpt was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub url: SourceUrl,
    pub source_version: DocumentVersion,
    pub input_bytes: usize,

    pub degradations: Vec<Degradation>,

    pub region: RegionSource,
    pub title_hint: Option<StructuralHint>,

    pub sentences_considered: usize,
    pub sentences_salient: usize,
    pub sentences_selected: usize,
    pub tier: SelectionTier,
}

/// The final result of one extraction invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub extraction: Extraction,
    pub report: ExtractionReport,
}
