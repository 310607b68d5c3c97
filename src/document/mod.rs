pub mod document;
pub mod hints;
pub mod markup;

pub use crate::types::identifiers::{DocumentVersion, SourceUrl};
pub use document::Document;
pub use hints::{HintTarget, StructuralHint};
pub use markup::{NormalizedMarkup, TagStripper};
