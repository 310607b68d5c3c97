use tracing::debug;

use crate::document::hints::{matching, HintTarget, StructuralHint};
use crate::document::markup::NormalizedMarkup;

/// Transient: a matched element's text, scored only by its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCandidate {
    pub priority: usize,
    pub hint: StructuralHint,
    pub text: String,
    pub text_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelection {
    Hinted(RegionCandidate),
    /// No hint produced a substantial element; the whole body text.
    Body(String),
}

impl RegionSelection {
    pub fn text(&self) -> &str {
        match self {
            RegionSelection::Hinted(candidate) => &candidate.text,
            RegionSelection::Body(text) => text,
        }
    }
}

/// Accept the first element, in document order, of the first hint whose text
/// has at least `min_chars` characters.
///
/// Earlier hints always win over later ones regardless of text size; within a
/// hint, document order decides.
pub fn find_hinted_region(
    markup: &NormalizedMarkup,
    hints: &[StructuralHint],
    min_chars: usize,
) -> Option<RegionCandidate> {
    for (priority, hint) in hints.iter().enumerate() {
        let mut rejected = 0usize;
        for element in matching(markup.root(), hint) {
            let text = element.visible_text();
            let text_len = text.chars().count();
            if text_len >= min_chars {
                debug!(priority, ?hint, text_len, rejected, "region accepted");
                return Some(RegionCandidate {
                    priority,
                    hint: hint.clone(),
                    text,
                    text_len,
                });
            }
            rejected += 1;
        }
        if rejected > 0 {
            debug!(priority, ?hint, rejected, "hint matched only short fragments");
        }
    }
    None
}

/// Region selection with the whole-body fallback.
///
/// The fallback re-strips `residual_tags` from the tree first, so the body
/// text never carries subtrees the normalizer or the caller consider noise.
pub fn select_region(
    markup: &mut NormalizedMarkup,
    hints: &[StructuralHint],
    min_chars: usize,
    residual_tags: &[String],
) -> RegionSelection {
    if let Some(candidate) = find_hinted_region(markup, hints, min_chars) {
        return RegionSelection::Hinted(candidate);
    }

    let removed = markup.strip(residual_tags);
    let text = markup.body().map(|body| body.visible_text()).unwrap_or_default();
    debug!(removed, text_len = text.len(), "falling back to document body");
    RegionSelection::Body(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn parse(html: &str) -> NormalizedMarkup {
        NormalizedMarkup::parse(html, &ExtractorConfig::v0().noise_tags).unwrap()
    }

    fn filler(word: &str, chars: usize) -> String {
        let mut out = String::new();
        while out.len() + word.len() + 1 <= chars {
            out.push_str(word);
            out.push(' ');
        }
        out.trim_end().to_string()
    }

    #[test]
    fn earlier_hint_beats_larger_generic_block() {
        let html = format!(
            "<body><div class=\"content\">{}</div><article>{}</article></body>",
            filler("generic", 4000),
            filler("article", 400),
        );
        let mut markup = parse(&html);
        let region = select_region(&mut markup, &ExtractorConfig::v0().region_hints, 250, &[]);

        match region {
            RegionSelection::Hinted(candidate) => {
                assert_eq!(candidate.priority, 0);
                assert_eq!(candidate.hint, StructuralHint::tag("article"));
                assert!(candidate.text.starts_with("article article"));
            }
            other => panic!("expected hinted region, got {other:?}"),
        }
    }

    #[test]
    fn teaser_is_skipped_within_same_hint() {
        let html = format!(
            "<body><article>{}</article><article>{}</article></body>",
            filler("teaser", 60),
            filler("body", 300),
        );
        let markup = parse(&html);
        let candidate = find_hinted_region(&markup, &[StructuralHint::tag("article")], 250).unwrap();
        assert!(candidate.text.starts_with("body body"));
        assert!(candidate.text_len >= 250);
    }

    #[test]
    fn threshold_is_inclusive() {
        let text = "x".repeat(250);
        let markup = parse(&format!("<body><main>{text}</main></body>"));
        assert!(find_hinted_region(&markup, &[StructuralHint::tag("main")], 250).is_some());
        assert!(find_hinted_region(&markup, &[StructuralHint::tag("main")], 251).is_none());
    }

    #[test]
    fn fallback_uses_body_without_residual_noise() {
        let mut markup = parse(
            "<body><p>Plain paragraph.</p><form><label>Email</label><button>Go</button></form></body>",
        );
        let region = select_region(
            &mut markup,
            &[StructuralHint::tag("article")],
            250,
            &["form".to_string()],
        );
        assert_eq!(region, RegionSelection::Body("Plain paragraph.".into()));
    }
}
