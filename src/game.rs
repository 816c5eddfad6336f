use crate::dictionary::SpellChecker;
use thiserror::Error;

/// Shortest submission the dictionary is ever consulted for.
pub const MIN_WORD_LEN: usize = 3;

/// Why a submission was turned down. `Display` is the user-facing message;
/// the alert title and score penalty hang off the variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Be more original")]
    AlreadyUsed,
    #[error("You can't just make them up, you know!")]
    NotRecognized,
    #[error("You can't spell that word from '{root}'!")]
    NotPossible { root: String },
}

impl WordError {
    pub fn title(&self) -> &'static str {
        match self {
            WordError::AlreadyUsed => "Word already used",
            WordError::NotRecognized => "Word not recognized",
            WordError::NotPossible { .. } => "Word not possible",
        }
    }

    pub fn penalty(&self) -> u32 {
        match self {
            WordError::AlreadyUsed => 5,
            WordError::NotRecognized => 10,
            WordError::NotPossible { .. } => 15,
        }
    }
}

/// Outcome of a single submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank after normalization; nothing changed.
    Ignored,
    Accepted { word: String, points: u32 },
    Rejected(WordError),
}

/// One running game: a root word, the words found so far (most recent
/// first) and the score. Replaced wholesale on "new game".
#[derive(Debug, Clone)]
pub struct Game {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: u32,
    pub language: String,
}

impl Game {
    pub fn new(root_word: String, language: String) -> Self {
        Self {
            root_word,
            used_words: vec![],
            score: 0,
            language,
        }
    }

    /// Run one submission through the three checks, in order: originality,
    /// realness, constructibility. The first failing check decides the
    /// penalty and the error; at most one penalty is applied per call.
    pub fn submit(&mut self, raw: &str, checker: &dyn SpellChecker) -> Submission {
        let answer = raw.trim().to_lowercase();

        if answer.is_empty() {
            return Submission::Ignored;
        }

        if !self.is_original(&answer) {
            return self.reject(WordError::AlreadyUsed);
        }

        if !self.is_real(&answer, checker) {
            return self.reject(WordError::NotRecognized);
        }

        if !self.is_possible(&answer) {
            return self.reject(WordError::NotPossible {
                root: self.root_word.clone(),
            });
        }

        let points = word_points(&answer);
        self.used_words.insert(0, answer.clone());
        self.score += points;

        Submission::Accepted {
            word: answer,
            points,
        }
    }

    fn reject(&mut self, error: WordError) -> Submission {
        self.score = self.score.saturating_sub(error.penalty());
        Submission::Rejected(error)
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    fn is_real(&self, word: &str, checker: &dyn SpellChecker) -> bool {
        word.chars().count() >= MIN_WORD_LEN && checker.is_valid(word, &self.language)
    }

    /// Each letter of the root word may be spent at most once per
    /// submission: walk the candidate and remove the first matching
    /// occurrence from a working copy of the root.
    fn is_possible(&self, word: &str) -> bool {
        let mut pool: Vec<char> = self.root_word.chars().collect();

        for letter in word.chars() {
            match pool.iter().position(|&c| c == letter) {
                Some(pos) => {
                    pool.remove(pos);
                }
                None => return false,
            }
        }

        true
    }
}

/// floor(len² / 2), with length counted in characters rather than bytes.
pub fn word_points(word: &str) -> u32 {
    let len = word.chars().count() as u32;
    len * len / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    struct FakeChecker {
        words: HashSet<&'static str>,
    }

    impl FakeChecker {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.iter().copied().collect(),
            }
        }
    }

    impl SpellChecker for FakeChecker {
        fn is_valid(&self, word: &str, language: &str) -> bool {
            language == "en" && self.words.contains(word)
        }
    }

    fn game(root: &str) -> Game {
        Game::new(root.to_string(), "en".to_string())
    }

    #[test]
    fn test_accepts_real_constructible_word() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["rots", "rose"]);

        let result = game.submit("rots", &checker);

        assert_eq!(
            result,
            Submission::Accepted {
                word: "rots".to_string(),
                points: 8,
            }
        );
        assert_eq!(game.used_words, vec!["rots".to_string()]);
        assert_eq!(game.score, 8);
    }

    #[test]
    fn test_duplicate_word_rejected_with_penalty() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["rots"]);

        game.submit("rots", &checker);
        let result = game.submit("rots", &checker);

        assert_eq!(result, Submission::Rejected(WordError::AlreadyUsed));
        assert_eq!(game.score, 3); // 8 - 5
        assert_eq!(game.used_words, vec!["rots".to_string()]);
    }

    #[test]
    fn test_duplicate_check_runs_before_realness() {
        // Force a word into the history, then strip it from the oracle:
        // resubmission must still fail as a duplicate, not as unrecognized.
        let mut game = game("storrer");
        game.submit("rose", &FakeChecker::new(&["rose"]));

        let result = game.submit("rose", &FakeChecker::new(&[]));

        assert_eq!(result, Submission::Rejected(WordError::AlreadyUsed));
    }

    #[test]
    fn test_short_word_rejected_before_dictionary_lookup() {
        let mut game = game("storrer");
        // "or" is in the oracle, but two characters is below the floor.
        let checker = FakeChecker::new(&["or"]);

        let result = game.submit("or", &checker);

        assert_eq!(result, Submission::Rejected(WordError::NotRecognized));
    }

    #[test]
    fn test_unknown_word_rejected_before_constructibility() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&[]);

        // "xyz" is neither real nor constructible; realness fires first.
        let result = game.submit("xyz", &checker);

        assert_eq!(result, Submission::Rejected(WordError::NotRecognized));
        assert_eq!(game.score, 0); // 0 - 10, clamped
    }

    #[test]
    fn test_unconstructible_word_rejected() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["otter"]);

        // "otter" needs two t's; "storrer" has one.
        let result = game.submit("otter", &checker);

        assert_matches!(result, Submission::Rejected(WordError::NotPossible { ref root }) if root == "storrer");
        assert!(game.used_words.is_empty());
    }

    #[test]
    fn test_root_letter_usable_once_per_submission() {
        let mut game = game("abc");
        let checker = FakeChecker::new(&["aab", "cab"]);

        assert_matches!(
            game.submit("aab", &checker),
            Submission::Rejected(WordError::NotPossible { .. })
        );
        // The working copy resets between submissions.
        assert_matches!(game.submit("cab", &checker), Submission::Accepted { .. });
    }

    #[test]
    fn test_score_never_goes_negative() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["otter"]);

        game.submit("xyz", &checker); // -10
        game.submit("otter", &checker); // -15

        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_penalties_stack_once_per_submission() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["rots", "rest", "rose"]);

        game.submit("rots", &checker); // +8
        game.submit("rest", &checker); // +8
        game.submit("rots", &checker); // duplicate, -5

        assert_eq!(game.score, 11);
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&[]);

        assert_eq!(game.submit("", &checker), Submission::Ignored);
        assert_eq!(game.submit("   \t ", &checker), Submission::Ignored);
        assert_eq!(game.score, 0);
        assert!(game.used_words.is_empty());
    }

    #[test]
    fn test_submissions_are_normalized() {
        let mut game = game("catalog");
        let checker = FakeChecker::new(&["cat"]);

        assert_matches!(
            game.submit(" CaT ", &checker),
            Submission::Accepted { ref word, .. } if word == "cat"
        );
        // "cat", "CAT" and " cat " are all the same word.
        assert_eq!(
            game.submit("CAT", &checker),
            Submission::Rejected(WordError::AlreadyUsed)
        );
        assert_eq!(
            game.submit(" cat ", &checker),
            Submission::Rejected(WordError::AlreadyUsed)
        );
    }

    #[test]
    fn test_accepted_words_prepend_to_history() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["rots", "rest", "rose"]);

        game.submit("rots", &checker);
        game.submit("rest", &checker);
        game.submit("rose", &checker);

        assert_eq!(
            game.used_words,
            vec!["rose".to_string(), "rest".to_string(), "rots".to_string()]
        );
    }

    #[test]
    fn test_rejection_leaves_history_untouched() {
        let mut game = game("storrer");
        let checker = FakeChecker::new(&["rots"]);

        game.submit("rots", &checker);
        game.submit("xyz", &checker);

        assert_eq!(game.used_words, vec!["rots".to_string()]);
    }

    #[test]
    fn test_points_use_character_count_not_bytes() {
        // "café" is four characters but five bytes in utf-8.
        assert_eq!(word_points("café"), 8);

        let mut game = game("décafé");
        let checker = FakeChecker::new(&["café"]);
        assert_eq!(
            game.submit("café", &checker),
            Submission::Accepted {
                word: "café".to_string(),
                points: 8,
            }
        );
    }

    #[test]
    fn test_word_points_table() {
        assert_eq!(word_points("cat"), 4); // 9 / 2
        assert_eq!(word_points("rots"), 8); // 16 / 2
        assert_eq!(word_points("roast"), 12); // 25 / 2
        assert_eq!(word_points("stormer"), 24); // 49 / 2
    }

    #[test]
    fn test_error_titles_and_penalties() {
        assert_eq!(WordError::AlreadyUsed.title(), "Word already used");
        assert_eq!(WordError::AlreadyUsed.penalty(), 5);
        assert_eq!(WordError::NotRecognized.title(), "Word not recognized");
        assert_eq!(WordError::NotRecognized.penalty(), 10);

        let not_possible = WordError::NotPossible {
            root: "storrer".to_string(),
        };
        assert_eq!(not_possible.title(), "Word not possible");
        assert_eq!(not_possible.penalty(), 15);
        assert_eq!(
            not_possible.to_string(),
            "You can't spell that word from 'storrer'!"
        );
    }
}
