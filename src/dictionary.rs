use include_dir::{include_dir, Dir};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

static DICT_DIR: Dir = include_dir!("assets/dictionaries");

/// Answers "is this a recognized word in the given language?". The game
/// treats the implementation as authoritative; anything word-set shaped
/// (bundled list, user file, trie, remote service) can sit behind it.
pub trait SpellChecker {
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no bundled dictionary for language '{0}'")]
    UnknownLanguage(String),
    #[error("dictionary for language '{0}' is not valid utf-8")]
    NotUtf8(String),
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary for language '{0}' contains no words")]
    Empty(String),
}

/// Word-set spell checker for a single language. Lookups are
/// case-insensitive; any other language is answered with `false`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load the dictionary bundled into the binary for `language`.
    pub fn bundled(language: &str) -> Result<Self, DictionaryError> {
        let file = DICT_DIR
            .get_file(format!("{language}.txt"))
            .ok_or_else(|| DictionaryError::UnknownLanguage(language.to_string()))?;

        let text = file
            .contents_utf8()
            .ok_or_else(|| DictionaryError::NotUtf8(language.to_string()))?;

        Self::from_text(language, text)
    }

    /// Load a user-supplied dictionary file: one word per line.
    pub fn from_path<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(language, &text)
    }

    fn from_text(language: &str, text: &str) -> Result<Self, DictionaryError> {
        let words: HashSet<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty(language.to_string()));
        }

        Ok(Self {
            language: language.to_string(),
            words,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(&word.to_lowercase())
    }
}
