use crate::types::ExtractedContent;

pub struct ExcerptBudget<'a> {
    pub max_chars: usize,
    pub marker: &'a str,
}

/// Combine title and sentence text, then enforce the character budget.
///
/// This is the only place content is shortened by raw character count. The
/// cut lands on a char boundary and the marker is counted inside the budget.
pub fn assemble_excerpt(title: &str, sentences: &str, budget: &ExcerptBudget<'_>) -> ExtractedContent {
    let assembled = if title.is_empty() {
        sentences.to_string()
    } else {
        format!("Title: {title}\n\nContent: {sentences}")
    };

    let len = assembled.chars().count();
    if len <= budget.max_chars {
        return ExtractedContent {
            title: title.to_string(),
            body: assembled,
            truncated: false,
        };
    }

    let keep = budget.max_chars.saturating_sub(budget.marker.chars().count());
    let cut = assembled
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(assembled.len());

    let mut body = assembled[..cut].trim_end().to_string();
    body.push_str(budget.marker);

    debug_assert!(body.chars().count() <= budget.max_chars);

    ExtractedContent {
        title: title.to_string(),
        body,
        truncated: true,
    }
}
