// Plural -> singular.

use crate::dictionary::Dictionary;
use crate::rules::{Rewrite, Rule, StageRules};
use crate::types::Stage;

const RULES: &[Rule] = &[
    // nuvens -> nuvem
    Rule::suffix(&["ns"], &[Rewrite::Append("m")]),
    // corações -> coração, pães -> pão, mãos -> mão
    Rule::suffix(&["ões", "ães", "ãos"], &[Rewrite::Append("ão")]),
    // animais -> animal, papéis -> papel, anzóis -> anzol, barris -> barril
    Rule::suffix(&["ais"], &[Rewrite::Append("al")]),
    Rule::suffix(&["éis"], &[Rewrite::Append("el")]),
    Rule::suffix(&["óis"], &[Rewrite::Append("ol")]),
    Rule::suffix(&["is"], &[Rewrite::Append("il")]),
    // flores -> flor
    Rule::suffix(&["es"], &[Rewrite::Append("")]),
    // casas -> casa
    Rule::suffix(&["s"], &[Rewrite::Append("")]),
];

pub static PLURAL: StageRules = StageRules {
    stage: Stage::Plural,
    applies: ends_in_s,
    rules: RULES,
};

fn ends_in_s(word: &str) -> bool {
    word.ends_with('s')
}

/// Reduce a plural to its singular if the singular is a known word.
/// Invariant plurals (ônibus, lápis) come back unchanged.
pub fn singularize(word: &str, dict: &Dictionary) -> String {
    PLURAL.rewrite(word, dict)
}
