// Derivational suffix -> root.
//
// Coverage is partial: -al only tries -o (so neither mundial -> mundo nor
// nacional -> nação) and -ismo only tries the stem and stem+o.

use crate::dictionary::Dictionary;
use crate::rules::{Rewrite, Rule, StageRules};
use crate::types::Stage;

const MIN_CHARS: usize = 5;

const RULES: &[Rule] = &[
    // Adverbs: felizmente -> feliz, lentamente -> lenta -> lento.
    Rule::suffix(
        &["mente"],
        &[Rewrite::Append(""), Rewrite::Swap { ends: "a", with: "o" }],
    ),
    // Professions and trees: pedreiro -> pedra, limoeiro -> limão.
    Rule::suffix(
        &["eiro", "eira"],
        &[
            Rewrite::Append("a"),
            Rewrite::Append("o"),
            Rewrite::Append("e"),
            Rewrite::Swap { ends: "o", with: "ão" },
        ],
    ),
    // jornalista -> jornal, dentista -> dente.
    Rule::suffix(
        &["ista"],
        &[
            Rewrite::Append(""),
            Rewrite::Append("e"),
            Rewrite::Append("o"),
            Rewrite::Append("a"),
        ],
    ),
    // Quality: beleza -> belo.
    Rule::suffix(
        &["eza", "ez"],
        &[Rewrite::Append("o"), Rewrite::Append("e"), Rewrite::Append("")],
    ),
    // felicidade -> feliz, bondade -> bom, lealdade -> leal.
    Rule::suffix(
        &["dade"],
        &[
            Rewrite::Swap { ends: "ci", with: "z" },
            Rewrite::Swap { ends: "n", with: "m" },
            Rewrite::Append(""),
            Rewrite::Swap { ends: "i", with: "il" },
        ],
    ),
    // realismo -> real.
    Rule::suffix(&["ismo"], &[Rewrite::Append(""), Rewrite::Append("o")]),
    // altura -> alto.
    Rule::suffix(&["ura"], &[Rewrite::Append("o"), Rewrite::Append("e")]),
    // casamento -> casar.
    Rule::suffix(&["mento"], &[Rewrite::Append("r")]),
    // criação -> criar, navegação -> navegar.
    Rule::suffix(&["ção"], &[Rewrite::Append("r"), Rewrite::Append("ar")]),
    // famoso -> fama.
    Rule::suffix(&["oso", "osa"], &[Rewrite::Append("a"), Rewrite::Append("o")]),
    // -al -> -o only.
    Rule::suffix(&["al"], &[Rewrite::Append("o")]),
    // amável -> amar, possível -> poder is out of reach.
    Rule::suffix(&["vel"], &[Rewrite::Unaccent("r"), Rewrite::Unaccent("er")]),
];

pub static DERIVATION: StageRules = StageRules {
    stage: Stage::Derivation,
    applies: long_enough,
    rules: RULES,
};

fn long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_CHARS
}

/// Strip a derivational suffix if the root is a known word.
pub fn strip_derivation(word: &str, dict: &Dictionary) -> String {
    DERIVATION.rewrite(word, dict)
}
