use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use std::path::Path;
use thiserror::Error;

static ROOTS_DIR: Dir = include_dir!("assets/roots");

/// Name of the root-word list bundled with the game.
pub const DEFAULT_LIST: &str = "english";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("no bundled root-word list named '{0}'")]
    Missing(String),
    #[error("root-word list '{0}' is not valid utf-8")]
    NotUtf8(String),
    #[error("failed to read root-word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("root-word list '{0}' contains no usable words")]
    Empty(String),
}

/// Immutable pool of candidate root words, loaded once at startup. A list
/// that cannot be loaded or holds no candidates is a startup error for the
/// host to act on, never a panic from in here.
#[derive(Debug, Clone)]
pub struct WordList {
    name: String,
    words: Vec<String>,
}

impl WordList {
    /// Load a root-word list bundled into the binary.
    pub fn bundled(name: &str) -> Result<Self, WordListError> {
        let file = ROOTS_DIR
            .get_file(format!("{name}.txt"))
            .ok_or_else(|| WordListError::Missing(name.to_string()))?;

        let text = file
            .contents_utf8()
            .ok_or_else(|| WordListError::NotUtf8(name.to_string()))?;

        Self::from_text(name, text)
    }

    /// Load a user-supplied list: newline-separated, one candidate per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let name = path.as_ref().display().to_string();
        let text = std::fs::read_to_string(&path)?;
        Self::from_text(&name, &text)
    }

    fn from_text(name: &str, text: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            words,
        })
    }

    /// Pick a root word uniformly at random.
    pub fn choose(&self) -> &str {
        let mut rng = rand::thread_rng();
        self.words
            .choose(&mut rng)
            .expect("word list is checked non-empty at load")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
