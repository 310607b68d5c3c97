use regex::Regex;

use crate::config::Lexicon;
use crate::types::SelectionTier;

/// Lexical salience signals for one sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceSignals {
    pub has_keyword: bool,
    pub has_number: bool,
    pub has_quote: bool,
}

impl SentenceSignals {
    pub fn is_salient(&self) -> bool {
        self.has_keyword || self.has_number || self.has_quote
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// Length in characters.
    pub len: usize,
    pub signals: SentenceSignals,
}

pub trait SentenceScorer {
    fn score(&self, sentence: &str) -> SentenceSignals;
}

/// v0: keyword lexicon, digits and quotation marks.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    keywords: Option<Regex>,
}

impl LexicalScorer {
    pub fn new(lexicon: &Lexicon) -> Result<Self, regex::Error> {
        Ok(Self {
            keywords: lexicon.to_pattern()?,
        })
    }
}

impl SentenceScorer for LexicalScorer {
    fn score(&self, sentence: &str) -> SentenceSignals {
        SentenceSignals {
            has_keyword: self.keywords.as_ref().is_some_and(|re| re.is_match(sentence)),
            has_number: sentence.chars().any(char::is_numeric),
            has_quote: sentence.chars().any(opens_quotation),
        }
    }
}

/// Limits for the two-tier selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub min_sentence_chars: usize,
    pub max_salient: usize,
    pub fallback_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSentences {
    /// Sentences that passed the length filter.
    pub considered: usize,
    pub salient: usize,
    /// Selected sentences, in source order.
    pub selected: Vec<Sentence>,
    pub tier: SelectionTier,
}

impl RankedSentences {
    pub fn joined(&self) -> String {
        self.selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split, filter by length, score, then select.
///
/// Salient sentences are preferred; if there are none the leading sentences
/// are used instead. Selection never reorders: output order is source order.
pub fn rank_sentences<S>(scorer: &S, text: &str, policy: &SelectionPolicy) -> RankedSentences
where
    S: SentenceScorer + ?Sized,
{
    let sentences: Vec<Sentence> = split_sentences(text)
        .into_iter()
        .filter_map(|segment| {
            let len = segment.chars().count();
            (len >= policy.min_sentence_chars).then(|| Sentence {
                text: segment.to_string(),
                len,
                signals: scorer.score(segment),
            })
        })
        .collect();

    let considered = sentences.len();
    let salient = sentences.iter().filter(|s| s.signals.is_salient()).count();

    let (selected, tier): (Vec<Sentence>, _) = if salient > 0 {
        let picked: Vec<Sentence> = sentences
            .into_iter()
            .filter(|s| s.signals.is_salient())
            .take(policy.max_salient)
            .collect();
        (picked, SelectionTier::Salient)
    } else if considered > 0 {
        let picked: Vec<Sentence> = sentences.into_iter().take(policy.fallback_count).collect();
        (picked, SelectionTier::Leading)
    } else {
        (Vec::new(), SelectionTier::Nothing)
    };

    debug_assert!(selected.len() <= policy.max_salient.max(policy.fallback_count));

    RankedSentences {
        considered,
        salient,
        selected,
        tier,
    }
}

/// Split on `.`, `!` or `?` (plus trailing closers) followed by whitespace
/// or the end of the text. The terminator stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        let mut end = text.len();
        while let Some(&(idx, next)) = chars.peek() {
            if is_terminal(next) || is_closer(next) {
                chars.next();
            } else {
                end = idx;
                break;
            }
        }

        if end == text.len() || text[end..].starts_with(char::is_whitespace) {
            push_trimmed(&mut out, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut out, &text[start..]);

    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        out.push(segment);
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}' | '\u{bb}')
}

/// Double quotes of any style, plus the single opening curly quote. The
/// closing single quote doubles as the apostrophe and does not count.
fn opens_quotation(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{ab}' | '\u{bb}' | '\u{2018}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexicalScorer {
        LexicalScorer::new(&Lexicon::newsworthy_v0()).unwrap()
    }

    fn policy() -> SelectionPolicy {
        SelectionPolicy {
            min_sentence_chars: 25,
            max_salient: 15,
            fallback_count: 10,
        }
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        let parts = split_sentences("First one. Second one! Third one? Trailing fragment");
        assert_eq!(parts, vec!["First one.", "Second one!", "Third one?", "Trailing fragment"]);
    }

    #[test]
    fn decimals_and_closers_do_not_split() {
        let parts = split_sentences("Shares rose 4.5 percent. He said \"enough.\" Then left.");
        assert_eq!(parts, vec!["Shares rose 4.5 percent.", "He said \"enough.\"", "Then left."]);
    }

    #[test]
    fn signals_are_independent() {
        let s = scorer();
        assert_eq!(
            s.score("The agency announced a review"),
            SentenceSignals { has_keyword: true, has_number: false, has_quote: false }
        );
        assert_eq!(
            s.score("There were 12 of them"),
            SentenceSignals { has_keyword: false, has_number: true, has_quote: false }
        );
        assert_eq!(
            s.score("She called it \u{201c}remarkable\u{201d}"),
            SentenceSignals { has_keyword: false, has_number: false, has_quote: true }
        );
        assert!(!s.score("It's a quiet afternoon").is_salient());
    }

    #[test]
    fn single_curly_quotes_mark_a_quotation() {
        let s = scorer();
        assert!(s.score("The minister called it \u{2018}a fair settlement\u{2019} today").has_quote);
        assert!(!s.score("The minister\u{2019}s office stayed quiet today").has_quote);
    }

    #[test]
    fn salient_tier_keeps_source_order() {
        let text = "The sky was a calm shade of blue all morning. \
                    The company reported $50 million in revenue. \
                    Birds were flying south over the quiet hills. \
                    A survey of residents found broad support.";
        let ranked = rank_sentences(&scorer(), text, &policy());

        assert_eq!(ranked.tier, SelectionTier::Salient);
        assert_eq!(ranked.considered, 4);
        assert_eq!(ranked.salient, 2);
        assert_eq!(
            ranked.joined(),
            "The company reported $50 million in revenue. A survey of residents found broad support."
        );
    }

    #[test]
    fn short_fragments_are_discarded() {
        let ranked = rank_sentences(&scorer(), "Read more. 5 min. Share!", &policy());
        assert_eq!(ranked.considered, 0);
        assert_eq!(ranked.tier, SelectionTier::Nothing);
        assert!(ranked.selected.is_empty());
    }

    #[test]
    fn salient_cap_applies() {
        let text = (1..=20)
            .map(|i| format!("Item number {i} is listed in this catalogue."))
            .collect::<Vec<_>>()
            .join(" ");
        let ranked = rank_sentences(&scorer(), &text, &policy());
        assert_eq!(ranked.selected.len(), 15);
        assert_eq!(ranked.selected[0].text, "Item number 1 is listed in this catalogue.");
        assert_eq!(ranked.selected[14].text, "Item number 15 is listed in this catalogue.");
    }

    #[test]
    fn leading_tier_without_signals() {
        let text = (0..12)
            .map(|_| "A plain sentence with nothing of note in it.")
            .collect::<Vec<_>>()
            .join(" ");
        let ranked = rank_sentences(&scorer(), &text, &policy());
        assert_eq!(ranked.tier, SelectionTier::Leading);
        assert_eq!(ranked.selected.len(), 10);
    }
}
