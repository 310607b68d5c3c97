pub mod lexicon;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::hints::StructuralHint;
pub use lexicon::Lexicon;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Empty structural hint in {0}")]
    EmptyHint(&'static str),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
// Missing fields in a config file fall back to v0 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Input is cut to this many bytes before parsing.
    pub max_input_bytes: usize,
    /// Wall-clock budget for one extraction, checked between stages.
    pub max_processing_ms: Option<u64>,

    /// Elements detached right after parsing.
    pub noise_tags: Vec<String>,
    /// Additionally detached before falling back to the whole body.
    pub fallback_noise_tags: Vec<String>,

    pub title_hints: Vec<StructuralHint>,
    /// A title candidate must be strictly longer than this.
    pub min_title_chars: usize,
    /// Candidates longer than this are containers, not titles.
    pub max_title_chars: usize,

    pub region_hints: Vec<StructuralHint>,
    pub min_region_chars: usize,

    pub boilerplate_lexicon: Lexicon,
    pub newsworthy_lexicon: Lexicon,

    pub min_sentence_chars: usize,
    pub max_salient_sentences: usize,
    pub fallback_sentence_count: usize,

    pub max_excerpt_chars: usize,
    pub truncation_marker: String,
}

impl ExtractorConfig {
    pub fn v0() -> Self {
        Self {
            max_input_bytes: 2 * 1024 * 1024,
            max_processing_ms: Some(5_000),
            noise_tags: strings(&[
                "script", "style", "nav", "header", "footer", "aside", "noscript", "template",
            ]),
            fallback_noise_tags: strings(&["button", "select", "iframe", "svg"]),
            title_hints: vec![
                StructuralHint::tag("h1"),
                StructuralHint::class("title"),
                StructuralHint::class("headline"),
                StructuralHint::class_contains("title"),
                StructuralHint::class_contains("headline"),
                StructuralHint::id_contains("title"),
                StructuralHint::tag("title"),
                StructuralHint::meta("og:title"),
            ],
            min_title_chars: 10,
            max_title_chars: 300,
            region_hints: vec![
                StructuralHint::tag("article"),
                StructuralHint::role("article"),
                StructuralHint::class_contains("content"),
                StructuralHint::id_contains("content"),
                StructuralHint::class_contains("article"),
                StructuralHint::id_contains("article"),
                StructuralHint::class_contains("post"),
                StructuralHint::id_contains("post"),
                StructuralHint::class_contains("entry"),
                StructuralHint::id_contains("entry"),
                StructuralHint::class_contains("story"),
                StructuralHint::id_contains("story"),
                StructuralHint::tag("main"),
                StructuralHint::role("main"),
            ],
            min_region_chars: 250,
            boilerplate_lexicon: Lexicon::boilerplate_v0(),
            newsworthy_lexicon: Lexicon::newsworthy_v0(),
            min_sentence_chars: 25,
            max_salient_sentences: 15,
            fallback_sentence_count: 10,
            max_excerpt_chars: 3_000,
            truncation_marker: "...".into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 {
            return Err(invalid("max_input_bytes", "must be positive"));
        }
        let marker_len = self.truncation_marker.chars().count();
        if self.max_excerpt_chars <= marker_len {
            return Err(invalid(
                "max_excerpt_chars",
                format!("must exceed the truncation marker length ({marker_len})"),
            ));
        }
        if self.max_salient_sentences == 0 {
            return Err(invalid("max_salient_sentences", "must be positive"));
        }
        if self.fallback_sentence_count == 0 {
            return Err(invalid("fallback_sentence_count", "must be positive"));
        }
        if self.max_title_chars <= self.min_title_chars {
            return Err(invalid("max_title_chars", "must exceed min_title_chars"));
        }
        if self.region_hints.is_empty() {
            return Err(invalid("region_hints", "at least one hint is required"));
        }
        if self.region_hints.iter().any(|h| h.value().trim().is_empty()) {
            return Err(ConfigError::EmptyHint("region_hints"));
        }
        if self.title_hints.iter().any(|h| h.value().trim().is_empty()) {
            return Err(ConfigError::EmptyHint("title_hints"));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
