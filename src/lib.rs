#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod board;
pub use board::{Board, Cursor, Key};

pub mod calendar;
pub use calendar::PuzzleDay;

pub mod feedback;
pub use feedback::Feedback;

pub mod session;
pub use session::{GameConfig, GameSession, GameStatus, Press};

pub mod share;

pub mod stats;
pub use stats::Statistics;

pub mod store;
pub use store::{DailyRecord, GameStore, History, KeyValueStore};

pub mod words;

/// A convenience alias used throughout the crate.
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_daily` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("puzzle setup encountered an error")]
    Puzzle {
        #[from]
        kind: PuzzleError,
    },

    #[error("game storage encountered an error")]
    Storage {
        #[from]
        kind: StorageError,
    },
}

/// Errors produced while configuring or selecting a puzzle.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The configured word list has no entries to select a daily word from.
    #[error("the configured word list is empty")]
    EmptyWordList,

    /// A word in the configured list does not match the length of the others.
    #[error("the word \"{0}\" is not {1} letters long")]
    BadWordLength(String, usize),

    /// A storage key could not be parsed back into a puzzle day.
    #[error("the day key \"{0}\" is not of the form <year>-<day-of-year>")]
    InvalidDayKey(String),

    /// A stored record does not fit the configured board shape.
    #[error("the stored record does not fit a {0}x{1} board")]
    MalformedRecord(usize, usize),
}

/// Errors produced while reading or writing saved games.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read or write the save data")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing or deserializing saved games")]
    Serde(#[from] serde_json::Error),
}
