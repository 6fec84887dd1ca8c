// Diminutive and augmentative -> neutral degree.
//
// The -z- forms (pezinho, cafezão) attach to words stressed on a final
// vowel, which loses its written accent in the derived form, so after the
// bare stem those rules retry it with the accent put back.

use crate::dictionary::Dictionary;
use crate::rules::{Accent, Rewrite, Rule, StageRules};
use crate::types::Stage;

const MIN_CHARS: usize = 4;

const RESTORE_ACCENT: &[Rewrite] = &[
    Rewrite::Append(""),
    Rewrite::Accent(Accent::Acute),
    Rewrite::Accent(Accent::Circumflex),
];

const RULES: &[Rule] = &[
    // pezinho -> pé, florzinha -> flor
    Rule::suffix(&["zinho", "zinha"], RESTORE_ACCENT),
    // gatinho -> gato, casinha -> casa, pastorinho -> pastor
    Rule::suffix(
        &["inho", "inha"],
        &[
            Rewrite::Append("o"),
            Rewrite::Append("a"),
            Rewrite::Append("e"),
            Rewrite::Append(""),
        ],
    ),
    // cafezão -> café
    Rule::suffix(&["zão"], RESTORE_ACCENT),
    Rule::suffix(&["zona"], RESTORE_ACCENT),
    // gatão -> gato, mulherão -> mulher
    Rule::suffix(&["ão"], &[Rewrite::Append("o"), Rewrite::Append("")]),
    // gatona -> gata
    Rule::suffix(&["ona"], &[Rewrite::Append("a"), Rewrite::Append("")]),
    // livrito -> livro
    Rule::suffix(&["ito", "ita"], &[Rewrite::Append("o"), Rewrite::Append("a")]),
];

pub static DEGREE: StageRules = StageRules {
    stage: Stage::Degree,
    applies: long_enough,
    rules: RULES,
};

fn long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_CHARS
}

/// Strip a diminutive or augmentative suffix if the base is a known word.
pub fn neutralize_degree(word: &str, dict: &Dictionary) -> String {
    DEGREE.rewrite(word, dict)
}
