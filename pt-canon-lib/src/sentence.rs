// Line-level canonicalization: split into words and reduce each independently.

use crate::dictionary::Dictionary;
use crate::pipeline;
use crate::types::*;

/// Canonicalize every word of a line of text.
pub fn canonicalize_text(input: &str, dict: &Dictionary) -> TextReduction {
    let words = split_text(input)
        .into_iter()
        .map(|token| WordReduction {
            reduction: pipeline::reduce(&token, dict),
            token,
        })
        .collect();

    TextReduction {
        input: input.to_string(),
        words,
    }
}

/// Strip punctuation around a token. Hyphens inside it are kept, since they
/// join clitics to verbs (amá-lo).
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Split on whitespace and strip punctuation around each token.
fn split_text(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|w| strip_punctuation(w).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}
