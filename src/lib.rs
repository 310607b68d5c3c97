//! Deterministic content extraction and salience ranking for arbitrary HTML.
//!
//! `excerpt-core` turns fetched markup into a short, information-dense text
//! excerpt under a hard character budget: it strips non-content subtrees,
//! locates the article region through prioritized structural hints, deletes
//! boilerplate phrases, keeps the sentences that carry lexical salience
//! signals and assembles them with the page title. Extraction never fails;
//! identical inputs always produce identical outputs, byte-for-byte.
//!
//! ```no_run
//! use excerpt_core::{ContentExtractor, Document, ExtractorConfig};
//!
//! let extractor = ContentExtractor::new(ExtractorConfig::v0()).unwrap();
//! let page = Document::from_html("https://example.com/story", "<html>...</html>");
//! let result = extractor.extract(&page);
//! if let Some(content) = result.extraction.content() {
//!     println!("{}", content.body);
//! }
//! ```

pub mod config;
pub mod document;
pub mod selection;
pub mod types;

pub use config::{ConfigError, ExtractorConfig, Lexicon};
pub use document::{Document, StructuralHint};
pub use selection::ContentExtractor;
pub use types::{ExtractedContent, Extraction, ExtractionResult};
