//! A single day's game: puzzle selection and the win/loss state machine.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Key},
    calendar::PuzzleDay,
    store::DailyRecord,
    words, PuzzleError, Result,
};

/// Where a game stands.
///
/// Transitions only move forward: `Playing` can become `Won` or `Lost`,
/// and both of those are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Returns true for the terminal states.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What a key press did.
///
/// End-of-game handling is the caller's job: a committed row carries the
/// status the game moved to, and the caller decides what to surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// The key had no effect (game over, full row, empty row, ...).
    Ignored,
    /// A letter was written or cleared.
    Edited,
    /// A full row was submitted; `status` is the state after evaluation.
    Committed { row: usize, status: GameStatus },
}

/// Configuration for a game session.
///
/// The word list and attempt count are explicit configuration rather
/// than module-level constants, so tests and alternative front ends can
/// supply their own. The defaults are [`words::ANSWERS`] and six
/// attempts.
///
/// # Examples
///
/// ```rust
/// use wordle_daily::GameConfig;
///
/// let config = GameConfig::new()
///     .word_list(vec!["hello".into(), "world".into()])
///     .tries(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    word_list: Vec<String>,
    max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_list: words::ANSWERS.iter().map(|w| w.to_string()).collect(),
            max_attempts: 6,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the answer list.
    pub fn word_list(self, word_list: Vec<String>) -> Self {
        GameConfig { word_list, ..self }
    }

    /// Replaces the maximum number of attempts.
    pub fn tries(self, max_attempts: usize) -> Self {
        GameConfig {
            max_attempts,
            ..self
        }
    }

    /// The maximum number of attempts.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The length of the words in the list.
    pub fn word_len(&self) -> usize {
        self.word_list.first().map_or(0, |w| w.chars().count())
    }

    /// Selects the answer for `day`.
    ///
    /// The day-of-year ordinal indexes the list, wrapping around when the
    /// list is shorter than the year.
    pub fn word_for(&self, day: &PuzzleDay) -> Result<&str> {
        if self.word_list.is_empty() {
            return Err(PuzzleError::EmptyWordList.into());
        }
        let index = (day.ordinal() as usize - 1) % self.word_list.len();
        Ok(&self.word_list[index])
    }

    fn validate(&self) -> Result<()> {
        if self.word_list.is_empty() {
            return Err(PuzzleError::EmptyWordList.into());
        }
        let len = self.word_len();
        for word in &self.word_list {
            if word.chars().count() != len {
                return Err(PuzzleError::BadWordLength(word.clone(), len).into());
            }
        }
        Ok(())
    }
}

/// One day's game session.
///
/// The session owns the board and the status, gates input on the status,
/// and projects itself into a [`DailyRecord`] for storage.
#[derive(Clone, Debug)]
pub struct GameSession {
    day: PuzzleDay,
    target: String,
    board: Board,
    status: GameStatus,
}

impl GameSession {
    /// Starts a fresh session for `day`.
    ///
    /// Fails if the configuration has an empty word list or words of
    /// uneven length.
    pub fn new(config: &GameConfig, day: PuzzleDay) -> Result<Self> {
        config.validate()?;
        let target = config.word_for(&day)?.to_string();
        let board = Board::new(config.max_attempts, config.word_len());
        Ok(GameSession {
            day,
            target,
            board,
            status: GameStatus::Playing,
        })
    }

    /// Resumes a session from its stored record.
    ///
    /// The target is re-derived from the configuration, so the record
    /// only needs the grid, cursor, and status. A record whose grid or
    /// cursor does not fit the configured board is rejected; stored data
    /// is untrusted and must never make later presses index out of
    /// bounds.
    pub fn resume(config: &GameConfig, day: PuzzleDay, record: DailyRecord) -> Result<Self> {
        let mut session = Self::new(config, day)?;
        if !record.fits(config.max_attempts, config.word_len()) {
            return Err(
                PuzzleError::MalformedRecord(config.max_attempts, config.word_len()).into(),
            );
        }
        let cursor = record.cursor();
        session.board = Board::from_parts(record.rows, cursor);
        session.status = record.status;
        Ok(session)
    }

    /// The day this session plays.
    pub fn day(&self) -> PuzzleDay {
        self.day
    }

    /// The answer word.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The guess grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Feeds one key press into the session.
    ///
    /// Once the game is over every key is ignored; the status never
    /// leaves a terminal state.
    pub fn press(&mut self, key: Key) -> Press {
        if self.status.is_over() {
            return Press::Ignored;
        }

        match key {
            Key::Letter(letter) => {
                if self.board.push_letter(letter.to_ascii_lowercase()) {
                    Press::Edited
                } else {
                    Press::Ignored
                }
            }
            Key::Clear => {
                if self.board.pop_letter() {
                    Press::Edited
                } else {
                    Press::Ignored
                }
            }
            Key::Enter => match self.board.commit_row() {
                Some(row) => {
                    self.status = self.evaluate(row);
                    Press::Committed {
                        row,
                        status: self.status,
                    }
                }
                None => Press::Ignored,
            },
        }
    }

    /// The transition rule, run right after `row` was committed.
    fn evaluate(&self, row: usize) -> GameStatus {
        let guessed = self
            .board
            .row_word(row)
            .map_or(false, |word| word == self.target);

        if guessed {
            GameStatus::Won
        } else if row + 1 == self.board.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Projects the session into its durable record.
    pub fn to_record(&self) -> DailyRecord {
        DailyRecord::new(self.board.clone(), self.status)
    }
}
