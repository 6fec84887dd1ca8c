// Orchestration of the five stages.
//
// The input must itself be a dictionary word; after that check each stage
// sees the previous stage's output, in fixed order. A stage only ever
// replaces the word with a dictionary-confirmed candidate, so the final form
// is always a known word.

use tracing::debug;

use crate::degree::DEGREE;
use crate::derivation::DERIVATION;
use crate::dictionary::{normalize, Dictionary};
use crate::gender::GENDER;
use crate::plural::PLURAL;
use crate::rules::StageRules;
use crate::types::{Outcome, Reduction, Step};
use crate::verb::VERB;

/// The cascade, in application order. Plural must precede gender and degree:
/// gatinhas -> gatinha -> gatinho -> gato.
pub static STAGES: [&StageRules; 5] = [&PLURAL, &GENDER, &DEGREE, &VERB, &DERIVATION];

/// Reduce a word to its canonical dictionary form.
///
/// Returns [`Outcome::Unknown`] if the (trimmed, lowercased) input is not in
/// the dictionary, including for empty or non-word input.
pub fn canonicalize(word: &str, dict: &Dictionary) -> Outcome {
    reduce(word, dict).outcome
}

/// Like [`canonicalize`], but also reports each rewrite that was applied.
pub fn reduce(word: &str, dict: &Dictionary) -> Reduction {
    let input = normalize(word).into_owned();

    if !dict.exists(&input) {
        debug!(word = %input, "not in dictionary");
        return Reduction {
            input,
            outcome: Outcome::Unknown,
            steps: vec![],
        };
    }

    let mut current = input.clone();
    let mut steps = Vec::new();

    for stage in STAGES {
        let accepted = stage
            .apply(&current, dict)
            .map(|c| (c.word, c.ending.to_string()));
        if let Some((to, ending)) = accepted {
            debug!(stage = %stage.stage, from = %current, to = %to, ending = %ending, "rewrite accepted");
            let from = std::mem::replace(&mut current, to.clone());
            steps.push(Step {
                stage: stage.stage,
                from,
                to,
                ending,
            });
        }
    }

    debug_assert!(dict.exists(&current));

    Reduction {
        input,
        outcome: Outcome::Canonical(current),
        steps,
    }
}
