use std::fmt;

use serde::{Deserialize, Serialize};

/// One rule family of the cascade, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Plural,
    Gender,
    Degree,
    Verb,
    Derivation,
}

impl Stage {
    /// All stages in the order the pipeline applies them.
    pub const ORDER: [Stage; 5] = [
        Stage::Plural,
        Stage::Gender,
        Stage::Degree,
        Stage::Verb,
        Stage::Derivation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Plural => "plural",
            Stage::Gender => "gender",
            Stage::Degree => "degree",
            Stage::Verb => "verb",
            Stage::Derivation => "derivation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of canonicalizing a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "word", rename_all = "lowercase")]
pub enum Outcome {
    /// The reduced form (possibly the input itself). Always a dictionary word.
    Canonical(String),
    /// The input was not in the dictionary, so nothing was attempted.
    Unknown,
}

impl Outcome {
    pub fn as_canonical(&self) -> Option<&str> {
        match self {
            Outcome::Canonical(w) => Some(w),
            Outcome::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Outcome::Unknown)
    }

    pub fn into_canonical(self) -> Option<String> {
        match self {
            Outcome::Canonical(w) => Some(w),
            Outcome::Unknown => None,
        }
    }
}

/// A rewrite accepted by one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub stage: Stage,
    pub from: String,
    pub to: String,
    /// The ending the rule matched (e.g. "ns", "zinho", "-lhe").
    pub ending: String,
}

/// A canonicalization together with the rewrites that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// The normalized (trimmed, lowercased) input.
    pub input: String,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Reduction of one token of a line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReduction {
    /// The token as it appeared, punctuation stripped.
    pub token: String,
    pub reduction: Reduction,
}

/// All token reductions for a line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReduction {
    pub input: String,
    pub words: Vec<WordReduction>,
}
