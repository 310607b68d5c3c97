use scraper::ElementRef;

use crate::document::hints::{matching, HintTarget, StructuralHint};

/// A title accepted under one hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub text: String,
    pub hint: StructuralHint,
}

/// Scan hints in priority order and return the first acceptable candidate.
///
/// A candidate is acceptable when its collapsed text is longer than
/// `min_chars` and no longer than `max_chars`. Within a hint, candidates are
/// tried in document order. No acceptable candidate is not an error.
///
/// The `max_chars` ceiling is an addition to the plain length floor: a
/// wrapper whose class mentions `title` carries the whole page text and is
/// skipped. Pass `usize::MAX` to accept any candidate over the floor.
pub fn resolve_title(
    root: ElementRef<'_>,
    hints: &[StructuralHint],
    min_chars: usize,
    max_chars: usize,
) -> Option<ResolvedTitle> {
    for hint in hints {
        for candidate in matching(root, hint) {
            let text = candidate.visible_text();
            let len = text.chars().count();
            if len > min_chars && len <= max_chars {
                return Some(ResolvedTitle {
                    text,
                    hint: hint.clone(),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;
    use scraper::Html;

    fn resolve(html: &str) -> Option<ResolvedTitle> {
        let config = ExtractorConfig::v0();
        let doc = Html::parse_document(html);
        resolve_title(doc.root_element(), &config.title_hints, config.min_title_chars, config.max_title_chars)
    }

    #[test]
    fn h1_wins_over_document_title() {
        let title = resolve(
            "<html><head><title>Site | A long page title</title></head>\
             <body><h1>Council approves new transit plan</h1></body></html>",
        )
        .unwrap();
        assert_eq!(title.text, "Council approves new transit plan");
        assert_eq!(title.hint, StructuralHint::tag("h1"));
    }

    #[test]
    fn short_candidates_are_skipped() {
        let title = resolve(
            "<html><head><title>Researchers map deep-sea vents</title></head>\
             <body><h1>Menu</h1><div class=\"headline\">Science</div></body></html>",
        )
        .unwrap();
        assert_eq!(title.text, "Researchers map deep-sea vents");
        assert_eq!(title.hint, StructuralHint::tag("title"));
    }

    #[test]
    fn later_candidate_under_same_hint_is_accepted() {
        let title = resolve("<body><h1>Home</h1><h1>A much longer second heading</h1></body>").unwrap();
        assert_eq!(title.text, "A much longer second heading");
    }

    #[test]
    fn exactly_ten_chars_is_rejected() {
        assert_eq!(resolve("<body><h1>0123456789</h1></body>"), None);
        assert!(resolve("<body><h1>0123456789A</h1></body>").is_some());
    }

    #[test]
    fn overlong_container_is_not_a_title() {
        let long = "word ".repeat(100);
        let html = format!(
            "<body><div class=\"page-title-wrapper\">{long}</div><h2 class=\"entry-title\">Readable entry title</h2></body>"
        );
        let title = resolve(&html).unwrap();
        assert_eq!(title.text, "Readable entry title");
    }

    #[test]
    fn unbounded_ceiling_accepts_any_candidate_over_the_floor() {
        let long = "word ".repeat(100);
        let html = format!("<body><h1>{long}</h1></body>");
        let doc = Html::parse_document(&html);
        let title = resolve_title(doc.root_element(), &[StructuralHint::tag("h1")], 10, usize::MAX).unwrap();
        assert_eq!(title.text.chars().count(), long.trim_end().chars().count());
    }

    #[test]
    fn og_title_is_the_last_resort() {
        let title = resolve(
            "<html><head><meta property=\"og:title\" content=\"Open graph headline here\"></head><body></body></html>",
        )
        .unwrap();
        assert_eq!(title.text, "Open graph headline here");
        assert_eq!(title.hint, StructuralHint::meta("og:title"));
    }

    #[test]
    fn no_candidates_yield_none() {
        assert_eq!(resolve("<body><p>just text</p></body>"), None);
    }
}
