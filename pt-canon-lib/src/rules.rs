// Data-driven suffix rules and the driver shared by every stage.
//
// A stage is a gate plus an ordered list of rules. A rule pairs an ending
// pattern with an ordered list of rewrites applied to the stem left after
// removing that ending. Candidates are produced lazily in rule order, then in
// rewrite order, and the first one the dictionary knows wins. Rules whose
// ending matches but whose candidates all fail fall through to the next rule.

use tracing::trace;

use crate::dictionary::Dictionary;
use crate::types::Stage;

// ---------------------------------------------------------------------------
// Rule vocabulary
// ---------------------------------------------------------------------------

/// How a rule recognizes its ending and splits off the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The word ends with one of these suffixes; the first listed match is
    /// used, so longer suffixes must precede their own tails.
    Suffix(&'static [&'static str]),
    /// The word contains a hyphen; the stem is the text before the first one.
    Clitic,
}

/// Which diacritic [`Rewrite::Accent`] puts on the stem's final vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Acute,
    Circumflex,
}

/// One way of turning a stem into a candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// stem + text. `Append("")` is the bare stem.
    Append(&'static str),
    /// If the stem ends with `ends`, replace that ending with `with`.
    Swap {
        ends: &'static str,
        with: &'static str,
    },
    /// The bare stem, only if it has more than this many characters.
    BareIfLonger(usize),
    /// stem + `append`, unless the stem ends with one of `ends`.
    AppendUnlessEnds {
        append: &'static str,
        ends: &'static [&'static str],
    },
    /// The stem with its final vowel accented.
    Accent(Accent),
    /// If the stem ends with an accented `á`, `í` or `é`, drop the accent and
    /// append the text.
    Unaccent(&'static str),
}

impl Rewrite {
    /// Produce the candidate for `stem`, or `None` when the rewrite does not
    /// apply to it.
    pub fn apply(&self, stem: &str) -> Option<String> {
        match *self {
            Rewrite::Append(text) => Some(format!("{stem}{text}")),
            Rewrite::Swap { ends, with } => stem
                .strip_suffix(ends)
                .map(|head| format!("{head}{with}")),
            Rewrite::BareIfLonger(min) => {
                (stem.chars().count() > min).then(|| stem.to_string())
            }
            Rewrite::AppendUnlessEnds { append, ends } => {
                if ends.iter().any(|e| stem.ends_with(e)) {
                    None
                } else {
                    Some(format!("{stem}{append}"))
                }
            }
            Rewrite::Accent(accent) => {
                let (head, last) = split_last_char(stem)?;
                let marked = match accent {
                    Accent::Acute => acute(last)?,
                    Accent::Circumflex => circumflex(last)?,
                };
                Some(format!("{head}{marked}"))
            }
            Rewrite::Unaccent(text) => {
                let (head, last) = split_last_char(stem)?;
                let plain = match last {
                    'á' => 'a',
                    'í' => 'i',
                    'é' => 'e',
                    _ => return None,
                };
                Some(format!("{head}{plain}{text}"))
            }
        }
    }
}

fn split_last_char(s: &str) -> Option<(&str, char)> {
    let last = s.chars().next_back()?;
    Some((&s[..s.len() - last.len_utf8()], last))
}

fn acute(c: char) -> Option<char> {
    match c {
        'a' => Some('á'),
        'e' => Some('é'),
        'i' => Some('í'),
        'o' => Some('ó'),
        'u' => Some('ú'),
        _ => None,
    }
}

fn circumflex(c: char) -> Option<char> {
    match c {
        'a' => Some('â'),
        'e' => Some('ê'),
        'o' => Some('ô'),
        _ => None,
    }
}

/// A rule family: an ending pattern and its ordered rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub rewrites: &'static [Rewrite],
}

impl Rule {
    pub const fn suffix(suffixes: &'static [&'static str], rewrites: &'static [Rewrite]) -> Self {
        Self {
            pattern: Pattern::Suffix(suffixes),
            rewrites,
        }
    }

    /// Split `word` into (stem, matched ending) if the pattern applies.
    pub fn split<'a>(&self, word: &'a str) -> Option<(&'a str, &'a str)> {
        match self.pattern {
            Pattern::Suffix(suffixes) => suffixes
                .iter()
                .find_map(|suffix| word.strip_suffix(suffix))
                .map(|stem| word.split_at(stem.len())),
            Pattern::Clitic => word.find('-').map(|at| word.split_at(at)),
        }
    }
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// A proposed rewrite awaiting dictionary confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: String,
    /// The part of the input the rule matched.
    pub ending: &'a str,
    pub rule: &'static Rule,
    pub rewrite: &'static Rewrite,
}

/// Every candidate the rules propose for `word`, in priority order, without
/// consulting any dictionary.
pub fn candidates<'a>(
    word: &'a str,
    rules: &'static [Rule],
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    rules
        .iter()
        .filter_map(move |rule| rule.split(word).map(|(stem, ending)| (rule, stem, ending)))
        .flat_map(|(rule, stem, ending)| {
            rule.rewrites.iter().filter_map(move |rewrite| {
                rewrite.apply(stem).map(|word| Candidate {
                    word,
                    ending,
                    rule,
                    rewrite,
                })
            })
        })
        .filter(|c| !c.word.is_empty())
}

/// The first candidate the dictionary confirms.
pub fn first_valid<'a>(
    word: &'a str,
    rules: &'static [Rule],
    dict: &Dictionary,
) -> Option<Candidate<'a>> {
    candidates(word, rules).find(|c| {
        let known = dict.exists(&c.word);
        if !known {
            trace!(word, candidate = %c.word, ending = c.ending, "candidate rejected");
        }
        known
    })
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// A stage of the cascade: a precondition on the word and its rule families.
pub struct StageRules {
    pub stage: Stage,
    /// Words failing this check pass through the stage untouched.
    pub applies: fn(&str) -> bool,
    pub rules: &'static [Rule],
}

impl StageRules {
    /// The accepted candidate, if the stage rewrites `word` at all.
    pub fn apply<'a>(&self, word: &'a str, dict: &Dictionary) -> Option<Candidate<'a>> {
        if !(self.applies)(word) {
            return None;
        }
        first_valid(word, self.rules, dict)
    }

    /// The stage as a plain `word -> word` function.
    pub fn rewrite(&self, word: &str, dict: &Dictionary) -> String {
        match self.apply(word, dict) {
            Some(c) => c.word,
            None => word.to_string(),
        }
    }
}
