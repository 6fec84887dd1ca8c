// Conjugated verb -> infinitive.

use crate::dictionary::Dictionary;
use crate::rules::{Pattern, Rewrite, Rule, StageRules};
use crate::types::Stage;

// Accented final vowels of a verb stem before an enclitic (amá-lo, vendê-lo).
const ACCENTED_STEM_ENDINGS: &[&str] = &["á", "é", "ê"];

const RULES: &[Rule] = &[
    // mandar-lhe -> mandar, amá-lo -> amar, vendê-lo -> vender, parti-lo -> partir
    Rule {
        pattern: Pattern::Clitic,
        rewrites: &[
            Rewrite::Append(""),
            Rewrite::Swap { ends: "á", with: "ar" },
            Rewrite::Swap { ends: "é", with: "er" },
            Rewrite::Swap { ends: "ê", with: "er" },
            Rewrite::AppendUnlessEnds {
                append: "r",
                ends: ACCENTED_STEM_ENDINGS,
            },
        ],
    },
    // Gerund.
    Rule::suffix(&["ando"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["endo"], &[Rewrite::Append("er")]),
    Rule::suffix(&["indo"], &[Rewrite::Append("ir")]),
    // Participle.
    Rule::suffix(&["ado"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["ido"], &[Rewrite::Append("er"), Rewrite::Append("ir")]),
    // Preterite, third person plural.
    Rule::suffix(&["aram"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["eram"], &[Rewrite::Append("er")]),
    Rule::suffix(&["iram"], &[Rewrite::Append("ir")]),
    // Imperfect.
    Rule::suffix(&["ava"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["ia"], &[Rewrite::Append("er"), Rewrite::Append("ir")]),
    // Short perfect endings.
    Rule::suffix(&["ou"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["eu"], &[Rewrite::Append("er")]),
    Rule::suffix(&["iu"], &[Rewrite::Append("ir")]),
    Rule::suffix(&["ei"], &[Rewrite::Append("ar")]),
    // Future, third person plural: amarão -> amar. The generic form keeps
    // the stem as is (terão -> terr), so it rarely hits.
    Rule::suffix(&["arão"], &[Rewrite::Append("ar")]),
    Rule::suffix(&["ão"], &[Rewrite::Append("r")]),
];

pub static VERB: StageRules = StageRules {
    stage: Stage::Verb,
    applies: any_word,
    rules: RULES,
};

fn any_word(_: &str) -> bool {
    true
}

/// Reduce a conjugated or clitic-bearing verb form to its infinitive if the
/// infinitive is a known word. Irregular stems are not handled.
pub fn to_infinitive(word: &str, dict: &Dictionary) -> String {
    VERB.rewrite(word, dict)
}
