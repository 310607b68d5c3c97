use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// A rule identifying elements likely to hold a title or the main content.
///
/// Values are compared ASCII case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum StructuralHint {
    /// Element name, e.g. `article`.
    Tag(String),
    /// One of the element's class tokens equals the value.
    Class(String),
    /// The raw `class` attribute contains the value as a substring.
    ClassContains(String),
    Id(String),
    IdContains(String),
    /// One of the tokens of the `role` attribute equals the value.
    Role(String),
    /// `<meta property=..>` or `<meta name=..>`; its `content` is the text.
    Meta(String),
}

impl StructuralHint {
    pub fn tag(value: &str) -> Self {
        StructuralHint::Tag(value.to_string())
    }

    pub fn class(value: &str) -> Self {
        StructuralHint::Class(value.to_string())
    }

    pub fn class_contains(value: &str) -> Self {
        StructuralHint::ClassContains(value.to_string())
    }

    pub fn id(value: &str) -> Self {
        StructuralHint::Id(value.to_string())
    }

    pub fn id_contains(value: &str) -> Self {
        StructuralHint::IdContains(value.to_string())
    }

    pub fn role(value: &str) -> Self {
        StructuralHint::Role(value.to_string())
    }

    pub fn meta(value: &str) -> Self {
        StructuralHint::Meta(value.to_string())
    }

    pub fn value(&self) -> &str {
        match self {
            StructuralHint::Tag(v)
            | StructuralHint::Class(v)
            | StructuralHint::ClassContains(v)
            | StructuralHint::Id(v)
            | StructuralHint::IdContains(v)
            | StructuralHint::Role(v)
            | StructuralHint::Meta(v) => v,
        }
    }
}

/// The traversal capability both the title and region scans are written against.
pub trait HintTarget {
    fn matches(&self, hint: &StructuralHint) -> bool;

    /// Visible text, text nodes joined by single spaces, in descendant order.
    fn visible_text(&self) -> String;
}

impl HintTarget for ElementRef<'_> {
    fn matches(&self, hint: &StructuralHint) -> bool {
        let element = self.value();
        match hint {
            StructuralHint::Tag(name) => element.name().eq_ignore_ascii_case(name),
            StructuralHint::Class(class) => element.classes().any(|c| c.eq_ignore_ascii_case(class)),
            StructuralHint::ClassContains(fragment) => element
                .attr("class")
                .is_some_and(|attr| contains_ignore_case(attr, fragment)),
            StructuralHint::Id(id) => element.id().is_some_and(|v| v.eq_ignore_ascii_case(id)),
            StructuralHint::IdContains(fragment) => element
                .id()
                .is_some_and(|v| contains_ignore_case(v, fragment)),
            StructuralHint::Role(role) => element
                .attr("role")
                .is_some_and(|attr| attr.split_whitespace().any(|r| r.eq_ignore_ascii_case(role))),
            StructuralHint::Meta(key) => {
                element.name() == "meta"
                    && element.attr("content").is_some()
                    && [element.attr("property"), element.attr("name")]
                        .into_iter()
                        .flatten()
                        .any(|v| v.eq_ignore_ascii_case(key))
            }
        }
    }

    fn visible_text(&self) -> String {
        if self.value().name() == "meta" {
            return collapse_whitespace(self.value().attr("content").unwrap_or_default());
        }

        let mut out = String::new();
        for chunk in self.text() {
            for word in chunk.split_whitespace() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(word);
            }
        }
        out
    }
}

/// All elements under (and including) `root` that match `hint`, in document order.
pub fn matching<'a, 'h>(
    root: ElementRef<'a>,
    hint: &'h StructuralHint,
) -> impl Iterator<Item = ElementRef<'a>> + 'h
where
    'a: 'h,
{
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.matches(hint))
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}
