// Feminine -> masculine.

use crate::dictionary::Dictionary;
use crate::rules::{Rewrite, Rule, StageRules};
use crate::types::Stage;

const RULES: &[Rule] = &[
    // portuguesa -> português
    Rule::suffix(&["esa"], &[Rewrite::Append("ês")]),
    // valentona -> valentão
    Rule::suffix(&["ona"], &[Rewrite::Append("ão")]),
    // menina -> menino
    Rule::suffix(&["a"], &[Rewrite::Append("o")]),
    // professora -> professor; short remainders are never tried.
    Rule::suffix(&["a"], &[Rewrite::BareIfLonger(2)]),
];

pub static GENDER: StageRules = StageRules {
    stage: Stage::Gender,
    applies: ends_in_a,
    rules: RULES,
};

fn ends_in_a(word: &str) -> bool {
    word.ends_with('a') || word.ends_with('ã')
}

/// Reduce a feminine form to its masculine counterpart if that is a known
/// word. Words with no masculine pair (mesa, pessoa) come back unchanged.
pub fn masculinize(word: &str, dict: &Dictionary) -> String {
    GENDER.rewrite(word, dict)
}
