use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::document::hints::collapse_whitespace;

/// Input text after byte limiting and UTF-8 decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInput {
    pub text: String,
    pub truncated: bool,
    pub lossy: bool,
}

/// Cut `raw` to at most `max_bytes` and decode it.
///
/// A multi-byte character split by the cut is dropped rather than replaced, so
/// a clean input never reports lossy decoding just because it was truncated.
pub fn decode_input(raw: &[u8], max_bytes: usize) -> DecodedInput {
    let truncated = raw.len() > max_bytes;
    let slice = if truncated { &raw[..max_bytes] } else { raw };

    match std::str::from_utf8(slice) {
        Ok(text) => DecodedInput {
            text: text.to_string(),
            truncated,
            lossy: false,
        },
        Err(err) if truncated && err.error_len().is_none() => DecodedInput {
            // Only an incomplete sequence at the cut; everything before it is valid.
            text: String::from_utf8_lossy(&slice[..err.valid_up_to()]).into_owned(),
            truncated,
            lossy: false,
        },
        Err(_) => DecodedInput {
            text: String::from_utf8_lossy(slice).into_owned(),
            truncated,
            lossy: true,
        },
    }
}

/// A parsed page with non-content subtrees detached.
///
/// Owned by a single extraction; removal is destructive, so later stages
/// cannot observe removed nodes.
pub struct NormalizedMarkup {
    html: Html,
}

impl NormalizedMarkup {
    /// Parse `text` and strip every element named in `noise_tags`.
    ///
    /// Returns `None` when the recovered tree has no `body`, which happens for
    /// frameset documents and is treated as an unusable tree.
    pub fn parse(text: &str, noise_tags: &[String]) -> Option<Self> {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            debug!(parse_errors = html.errors.len(), "markup recovered from parse errors");
        }

        let mut markup = NormalizedMarkup { html };
        markup.body()?;

        let removed = markup.strip(noise_tags);
        debug!(removed, "stripped non-content subtrees");
        Some(markup)
    }

    /// The `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.root()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body")
    }

    /// Detach every element whose name is in `tags`. Returns how many
    /// subtrees were detached.
    pub fn strip(&mut self, tags: &[String]) -> usize {
        let ids: Vec<_> = self
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.iter().any(|tag| el.value().name().eq_ignore_ascii_case(tag)))
            .map(|el| el.id())
            .collect();

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }
        ids.len()
    }
}

/// Plain-text rendering of markup that could not be parsed into a usable tree.
pub struct TagStripper {
    raw_text_blocks: Vec<Regex>,
    tag: Regex,
}

impl TagStripper {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            raw_text_blocks: vec![
                Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>")?,
                Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>")?,
                Regex::new(r"(?s)<!--.*?-->")?,
            ],
            tag: Regex::new(r"(?s)<[^>]*>")?,
        })
    }

    /// Delete everything between angle brackets and collapse whitespace.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        for block in &self.raw_text_blocks {
            out = block.replace_all(&out, " ").into_owned();
        }
        out = self.tag.replace_all(&out, " ").into_owned();

        collapse_whitespace(&decode_entities(&out))
    }
}

/// Decode the handful of entities that survive a tag strip.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
