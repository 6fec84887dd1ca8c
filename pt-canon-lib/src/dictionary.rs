use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

const BUNDLED_WORDS: &str = include_str!("../../data/palavras.txt");

/// Failure to materialize a dictionary from its backing source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dictionary source not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read dictionary source {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable, sorted list of known word forms. Membership is answered by
/// binary search, so the list must stay sorted in `str` order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// A dictionary with no entries. Every lookup against it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The sample word list shipped in `data/palavras.txt`.
    pub fn bundled() -> Self {
        Self::parse_from_str(BUNDLED_WORDS)
    }

    /// Read a one-word-per-line UTF-8 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let dict = Self::parse_from_str(&contents);
        info!(path = %path.display(), entries = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Like [`Dictionary::load`], but falls back to an empty dictionary on
    /// failure so that every later lookup answers false.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(dict) => dict,
            Err(e) => {
                warn!(error = %e, "continuing with an empty dictionary");
                Self::empty()
            }
        }
    }

    /// Parse word-list text. Blank lines are skipped; entries are trimmed and
    /// lowercased the same way queries are.
    pub fn parse_from_str(contents: &str) -> Self {
        let mut words: Vec<String> = contents
            .lines()
            .map(|line| normalize(line).into_owned())
            .filter(|w| !w.is_empty())
            .collect();

        if !words.windows(2).all(|pair| pair[0] <= pair[1]) {
            warn!(entries = words.len(), "dictionary source is not sorted, sorting in memory");
            words.sort_unstable();
        }
        words.dedup();

        Self { words }
    }

    /// Build from arbitrary words in any order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()).into_owned())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Membership oracle. Case and surrounding whitespace are ignored.
    pub fn exists(&self, word: &str) -> bool {
        let needle = normalize(word);
        if needle.is_empty() {
            return false;
        }
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(&*needle))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries, in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Trim and lowercase, borrowing when the input is already normal.
pub fn normalize(word: &str) -> Cow<'_, str> {
    let trimmed = word.trim();
    if trimmed.chars().any(char::is_uppercase) {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
