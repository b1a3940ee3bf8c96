//! Saving and loading game history.
//!
//! All history lives under a single key in an opaque key-value store:
//! the value is a JSON map from day key to that day's record, read in
//! full and rewritten in full on every change.
//!
//! The error policy is explicit rather than implicit: [`GameStore::load`]
//! propagates storage and parse failures, and [`GameStore::load_or_default`]
//! is the documented opt-in for the "saved history is cosmetic, a broken
//! save file is no history" stance the game takes.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Cursor},
    calendar::PuzzleDay,
    session::GameStatus,
    StorageError,
};

/// The storage key the whole game history lives under.
pub const GAME_KEY: &str = "@game";

/// The durable projection of one day's session.
///
/// Holds exactly what is needed to resume: the grid, the cursor, and the
/// status. Feedback is never stored since it is derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub(crate) rows: Vec<Vec<Option<char>>>,
    #[serde(rename = "curRow")]
    cur_row: usize,
    #[serde(rename = "curCol")]
    cur_col: usize,
    #[serde(rename = "gameState")]
    pub(crate) status: GameStatus,
}

impl DailyRecord {
    pub(crate) fn new(board: Board, status: GameStatus) -> Self {
        let (rows, cursor) = board.into_parts();
        DailyRecord {
            rows,
            cur_row: cursor.row,
            cur_col: cursor.col,
            status,
        }
    }

    pub(crate) fn cursor(&self) -> Cursor {
        Cursor {
            row: self.cur_row,
            col: self.cur_col,
        }
    }

    /// Returns true if the record describes a `max_attempts` x `word_len`
    /// board with an in-bounds cursor.
    ///
    /// Stored data is untrusted; a record that fails this check must not
    /// be resumed, or later grid writes would index out of bounds.
    pub(crate) fn fits(&self, max_attempts: usize, word_len: usize) -> bool {
        self.rows.len() == max_attempts
            && self.rows.iter().all(|row| row.len() == word_len)
            && self.cur_row <= max_attempts
            && self.cur_col <= word_len
    }

    /// The outcome recorded for the day.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The number of attempts with at least one letter.
    pub fn attempts_used(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.first().map_or(false, Option::is_some))
            .count()
    }
}

/// The full day-keyed history, ordered by calendar day.
pub type History = BTreeMap<PuzzleDay, DailyRecord>;

/// An opaque asynchronous-in-spirit get/set-by-key store.
///
/// The device storage the game targets only offers string values by
/// string key. Anything that can answer a get and accept a set works:
/// [`MemoryStore`] backs tests, [`FileStore`] backs the terminal runner.
pub trait KeyValueStore {
    /// Reads the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// An in-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// A store backed by a single JSON file of key-value pairs.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);
        fs::write(&self.path, serde_json::to_string(&values)?)?;
        Ok(())
    }
}

/// The typed layer over a [`KeyValueStore`].
///
/// # Examples
///
/// ```rust
/// use wordle_daily::{
///     store::MemoryStore, GameConfig, GameSession, GameStore,
/// };
///
/// let mut store = GameStore::new(MemoryStore::new());
/// let session = GameSession::new(&GameConfig::new(), "2022-32".parse()?)?;
/// store.record_day(session.day(), session.to_record())?;
///
/// assert_eq!(store.load()?.len(), 1);
/// #
/// # Ok::<_, wordle_daily::WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameStore<S> {
    inner: S,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(inner: S) -> Self {
        GameStore { inner }
    }

    /// Reads the full history, propagating storage and parse failures.
    ///
    /// A missing value is no history, not an error.
    pub fn load(&self) -> Result<History, StorageError> {
        match self.inner.get(GAME_KEY)? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(History::new()),
        }
    }

    /// Reads the full history, treating anything unreadable as empty.
    ///
    /// This is the game's documented stance on broken save data: log it
    /// and move on with an empty history.
    pub fn load_or_default(&self) -> History {
        match self.load() {
            Ok(history) => history,
            Err(e) => {
                log::warn!("discarding unreadable game history: {}", e);
                History::new()
            }
        }
    }

    /// Rewrites the full history.
    pub fn save(&mut self, history: &History) -> Result<(), StorageError> {
        self.inner.set(GAME_KEY, serde_json::to_string(history)?)
    }

    /// Updates one day's record, read-modify-writing the whole map.
    ///
    /// Records are never deleted; history accumulates indefinitely.
    pub fn record_day(
        &mut self,
        day: PuzzleDay,
        record: DailyRecord,
    ) -> Result<(), StorageError> {
        let mut history = self.load_or_default();
        history.insert(day, record);
        self.save(&history)
    }

    /// Gives back the underlying store.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{board::Key, GameConfig, GameSession};

    fn config() -> GameConfig {
        GameConfig::new().word_list(vec!["hello".into(), "world".into()])
    }

    fn finished_session(key: &str, guess_word: &str) -> GameSession {
        let mut session = GameSession::new(&config(), key.parse().unwrap()).unwrap();
        while !session.status().is_over() {
            for c in guess_word.chars() {
                session.press(Key::Letter(c));
            }
            session.press(Key::Enter);
        }
        session
    }

    #[test]
    fn history_round_trips_identically() {
        let mut history = History::new();
        for (key, word) in [("2022-1", "hello"), ("2022-2", "world"), ("2022-3", "world")] {
            let session = finished_session(key, word);
            history.insert(session.day(), session.to_record());
        }

        let mut store = GameStore::new(MemoryStore::new());
        store.save(&history).unwrap();
        assert_eq!(store.load().unwrap(), history);
    }

    #[test]
    fn missing_data_is_no_history() {
        let store = GameStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn garbage_fails_load_but_not_load_or_default() {
        let mut inner = MemoryStore::new();
        inner.set(GAME_KEY, "not json at all".to_string()).unwrap();
        let store = GameStore::new(inner);

        assert!(store.load().is_err());
        assert!(store.load_or_default().is_empty());
    }

    #[test]
    fn record_day_accumulates() {
        let mut store = GameStore::new(MemoryStore::new());
        let first = finished_session("2022-1", "hello");
        let second = finished_session("2022-2", "world");
        store.record_day(first.day(), first.to_record()).unwrap();
        store.record_day(second.day(), second.to_record()).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[&"2022-1".parse().unwrap()].status(),
            crate::GameStatus::Won
        );
    }

    #[test]
    fn record_fields_match_the_session() {
        let mut session =
            GameSession::new(&config(), "2022-1".parse().unwrap()).unwrap();
        for c in "world".chars() {
            session.press(Key::Letter(c));
        }
        session.press(Key::Enter);
        session.press(Key::Letter('h'));

        let record = session.to_record();
        assert_eq!(record.cursor(), crate::board::Cursor { row: 1, col: 1 });
        assert_eq!(record.attempts_used(), 2);
        assert_eq!(record.status(), crate::GameStatus::Playing);
    }
}
