// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod dictionary;
pub mod game;
pub mod runtime;
pub mod ui;
pub mod word_list;

use crate::config::Config;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::{Game, Submission, WordError};
use crate::word_list::{WordList, WordListError, DEFAULT_LIST};
use thiserror::Error;

pub const TICK_RATE_MS: u64 = 100;

/// The game cannot start without its word resources. Surfaced from
/// initialization so the host decides what to do; library code never
/// terminates the process over it.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot pick a root word: {0}")]
    WordList(#[from] WordListError),
    #[error("cannot check submissions: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Top-level TUI state: the running game plus the transient input field
/// and error popup. The error is presentation state, not game state; it
/// clears on acknowledgment.
#[derive(Debug)]
pub struct App {
    pub game: Game,
    pub input: String,
    pub error: Option<WordError>,
    config: Config,
    word_list: WordList,
    dictionary: Dictionary,
}

impl App {
    /// Load the word resources and start the first game.
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let word_list = match &config.root_list {
            Some(path) => WordList::from_path(path)?,
            None => WordList::bundled(DEFAULT_LIST)?,
        };

        let dictionary = match &config.dictionary {
            Some(path) => Dictionary::from_path(&config.language, path)?,
            None => Dictionary::bundled(&config.language)?,
        };

        let game = Game::new(word_list.choose().to_string(), config.language.clone());

        Ok(Self {
            game,
            input: String::new(),
            error: None,
            config,
            word_list,
            dictionary,
        })
    }

    /// Replace the session wholesale: fresh random root word, empty
    /// history, zero score.
    pub fn new_game(&mut self) {
        self.game = Game::new(
            self.word_list.choose().to_string(),
            self.config.language.clone(),
        );
        self.input.clear();
        self.error = None;
    }

    /// Editing is inert while an error popup is up; the popup has to be
    /// acknowledged first.
    pub fn push_char(&mut self, c: char) {
        if self.error.is_none() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.error.is_none() {
            self.input.pop();
        }
    }

    /// Drain the input field through the game's checks. A rejection
    /// becomes the active error for the popup to display.
    pub fn submit_input(&mut self) -> Submission {
        let raw = std::mem::take(&mut self.input);
        let outcome = self.game.submit(&raw, &self.dictionary);

        if let Submission::Rejected(error) = &outcome {
            self.error = Some(error.clone());
        }

        outcome
    }

    pub fn acknowledge_error(&mut self) {
        self.error = None;
    }
}
