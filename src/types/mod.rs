pub mod extraction;
pub mod identifiers;

pub use extraction::{
    Degradation, EmptyReason, ExtractedContent, Extraction, ExtractionReport, ExtractionResult,
    RegionSource, SelectionTier,
};
pub use identifiers::{DocumentVersion, SourceUrl};
