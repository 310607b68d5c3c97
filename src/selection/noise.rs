use regex::Regex;

use crate::config::Lexicon;
use crate::document::hints::collapse_whitespace;

/// Lexical boilerplate filter over region text.
///
/// Blunt on purpose: it deletes phrases, never whole sentences.
#[derive(Debug, Clone)]
pub struct NoiseSuppressor {
    boilerplate: Option<Regex>,
}

impl NoiseSuppressor {
    pub fn new(lexicon: &Lexicon) -> Result<Self, regex::Error> {
        Ok(Self {
            boilerplate: lexicon.to_pattern()?,
        })
    }

    /// Collapse whitespace, delete boilerplate phrases, collapse again.
    pub fn clean(&self, text: &str) -> String {
        let collapsed = collapse_whitespace(text);
        match &self.boilerplate {
            Some(pattern) => collapse_whitespace(&pattern.replace_all(&collapsed, " ")),
            None => collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppressor() -> NoiseSuppressor {
        NoiseSuppressor::new(&Lexicon::boilerplate_v0()).unwrap()
    }

    #[test]
    fn subscription_prompt_is_removed_entirely() {
        let cleaned = suppressor().clean("Rates rose again.   Subscribe to our newsletter for updates\n\nMarkets fell.");
        assert_eq!(cleaned, "Rates rose again. Markets fell.");
    }

    #[test]
    fn removal_is_case_insensitive() {
        let cleaned = suppressor().clean("ACCEPT ALL COOKIES Sign In The report follows.");
        assert_eq!(cleaned, "The report follows.");
    }

    #[test]
    fn words_containing_lexicon_terms_survive() {
        let cleaned = suppressor().clean("The registered voters determined the outcome.");
        assert_eq!(cleaned, "The registered voters determined the outcome.");
    }

    #[test]
    fn empty_lexicon_only_collapses_whitespace() {
        let suppressor = NoiseSuppressor::new(&Lexicon::new(Vec::<String>::new())).unwrap();
        assert_eq!(suppressor.clean("  a \t b\n"), "a b");
    }
}
