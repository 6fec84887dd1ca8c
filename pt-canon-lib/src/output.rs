// Plain-text formatting of reductions.

use crate::types::*;

/// Marker printed in place of a canonical form for unknown words.
pub const UNKNOWN_MARKER: &str = "?";

/// Capitalize the first letter for display (coração -> Coração).
pub fn display_form(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The canonical form, or [`UNKNOWN_MARKER`].
pub fn to_plain(outcome: &Outcome) -> &str {
    outcome.as_canonical().unwrap_or(UNKNOWN_MARKER)
}

/// Render the rewrite chain of a reduction.
///
/// Format:
///   Rewritten: `gatinhas → gatinha (plural -s) → gatinho (gender -a) → gato (degree -inho)`
///   Unchanged: `casa`
///   Unknown:   `xpto ?`
pub fn trace_line(r: &Reduction) -> String {
    if r.outcome.is_unknown() {
        return format!("{} {UNKNOWN_MARKER}", r.input);
    }
    let mut line = r.input.clone();
    for step in &r.steps {
        let ending = if step.ending.starts_with('-') {
            step.ending.clone()
        } else {
            format!("-{}", step.ending)
        };
        line.push_str(&format!(" → {} ({} {ending})", step.to, step.stage));
    }
    line
}

/// Canonical forms of a whole line, space separated.
pub fn text_to_plain(t: &TextReduction) -> String {
    t.words
        .iter()
        .map(|w| to_plain(&w.reduction.outcome))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(stage: Stage, from: &str, to: &str, ending: &str) -> Step {
        Step {
            stage,
            from: from.to_string(),
            to: to.to_string(),
            ending: ending.to_string(),
        }
    }

    #[test]
    fn test_display_form() {
        assert_eq!(display_form("coração"), "Coração");
        assert_eq!(display_form("ônibus"), "Ônibus");
        assert_eq!(display_form(""), "");
    }

    #[test]
    fn test_trace_line_chain() {
        let r = Reduction {
            input: "gatinhas".to_string(),
            outcome: Outcome::Canonical("gato".to_string()),
            steps: vec![
                step(Stage::Plural, "gatinhas", "gatinha", "s"),
                step(Stage::Gender, "gatinha", "gatinho", "a"),
                step(Stage::Degree, "gatinho", "gato", "inho"),
            ],
        };
        assert_eq!(
            trace_line(&r),
            "gatinhas → gatinha (plural -s) → gatinho (gender -a) → gato (degree -inho)"
        );
    }

    #[test]
    fn test_trace_line_clitic() {
        let r = Reduction {
            input: "amá-lo".to_string(),
            outcome: Outcome::Canonical("amar".to_string()),
            steps: vec![step(Stage::Verb, "amá-lo", "amar", "-lo")],
        };
        assert_eq!(trace_line(&r), "amá-lo → amar (verb -lo)");
    }

    #[test]
    fn test_trace_line_unknown_and_unchanged() {
        let unknown = Reduction {
            input: "xpto".to_string(),
            outcome: Outcome::Unknown,
            steps: vec![],
        };
        assert_eq!(trace_line(&unknown), "xpto ?");

        let unchanged = Reduction {
            input: "casa".to_string(),
            outcome: Outcome::Canonical("casa".to_string()),
            steps: vec![],
        };
        assert_eq!(trace_line(&unchanged), "casa");
    }

    #[test]
    fn test_text_to_plain() {
        let word = |token: &str, outcome: Outcome| WordReduction {
            token: token.to_string(),
            reduction: Reduction {
                input: token.to_lowercase(),
                outcome,
                steps: vec![],
            },
        };
        let t = TextReduction {
            input: "Casas xpto".to_string(),
            words: vec![
                word("Casas", Outcome::Canonical("casa".to_string())),
                word("xpto", Outcome::Unknown),
            ],
        };
        assert_eq!(text_to_plain(&t), "casa ?");
    }
}
