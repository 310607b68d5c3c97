use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// An immutable list of lowercase phrases.
///
/// Terms are trimmed, lowercased and deduplicated on construction, keeping
/// first occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compile a case-insensitive alternation matching any term as a whole word.
    ///
    /// Longer terms come first so a phrase wins over a word it contains.
    /// An empty lexicon compiles to `None`.
    pub fn to_pattern(&self) -> Result<Option<Regex>, regex::Error> {
        if self.terms.is_empty() {
            return Ok(None);
        }

        let mut ordered: Vec<&String> = self.terms.iter().collect();
        ordered.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = ordered
            .iter()
            .map(|term| word_bounded(term))
            .collect::<Vec<_>>()
            .join("|");

        RegexBuilder::new(&format!("(?:{alternation})"))
            .case_insensitive(true)
            .build()
            .map(Some)
    }

    /// Site-furniture phrases deleted from region text.
    pub fn boilerplate_v0() -> Self {
        Self::new([
            "subscribe to our newsletter for updates",
            "subscribe to our newsletter",
            "sign up for our newsletter",
            "we use cookies",
            "accept all cookies",
            "accept cookies",
            "cookie policy",
            "cookie settings",
            "privacy policy",
            "terms of service",
            "terms of use",
            "terms and conditions",
            "all rights reserved",
            "skip to content",
            "share this article",
            "advertisement",
            "sponsored",
            "cookies",
            "cookie",
            "privacy",
            "terms",
            "subscribe",
            "newsletter",
            "sign in",
            "sign up",
            "log in",
            "login",
            "register",
        ])
    }

    /// Newsworthiness keywords used as a salience signal.
    pub fn newsworthy_v0() -> Self {
        Self::new([
            "announced",
            "announces",
            "reported",
            "reports",
            "found",
            "revealed",
            "launched",
            "released",
            "confirmed",
            "according",
            "million",
            "billion",
            "percent",
            "users",
            "customers",
            "revenue",
            "growth",
            "investigation",
            "study",
            "survey",
            "research",
            "analysis",
            "data",
        ])
    }
}

impl From<Vec<String>> for Lexicon {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<Lexicon> for Vec<String> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.terms
    }
}

fn word_bounded(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trail = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };

    // Inner spaces match any whitespace run.
    let body = term
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    format!("{lead}{body}{trail}")
}
