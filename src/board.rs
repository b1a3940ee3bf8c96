//! The guess grid and its cursor.
//!
//! A [`Board`] is the R×L grid of letter slots a game is played on. It
//! knows nothing about the target word or the win condition; it only
//! enforces the editing rules: rows fill left to right, a row must be
//! full before it can be committed, and committed rows are frozen.

use serde::{Deserialize, Serialize};

/// A single input from the keyboard.
///
/// This is the whole input contract: a letter, a backspace, or a submit.
/// No other input is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter key.
    Letter(char),
    /// The clear/backspace key.
    Clear,
    /// The enter/submit key.
    Enter,
}

/// The position of the next editable slot.
///
/// `row` ranges over `0..=max_attempts`; it equals `max_attempts` once
/// every row has been committed. `col` ranges over `0..=word_len` and
/// resets to 0 whenever the row advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// The guess grid: one row per attempt, one slot per letter.
///
/// Empty slots are `None`. All mutation goes through [`push_letter`],
/// [`pop_letter`], and [`commit_row`], which keep two invariants: a slot
/// is filled only if every slot to its left in the same row is filled,
/// and every row past the cursor row is entirely empty.
///
/// [`push_letter`]: Board::push_letter
/// [`pop_letter`]: Board::pop_letter
/// [`commit_row`]: Board::commit_row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Option<char>>>,
    cursor: Cursor,
}

impl Board {
    /// Creates an empty board with `max_attempts` rows of `word_len` slots.
    pub fn new(max_attempts: usize, word_len: usize) -> Self {
        Board {
            rows: vec![vec![None; word_len]; max_attempts],
            cursor: Cursor::default(),
        }
    }

    /// Rebuilds a board from its stored parts.
    pub(crate) fn from_parts(rows: Vec<Vec<Option<char>>>, cursor: Cursor) -> Self {
        Board { rows, cursor }
    }

    /// The number of rows, i.e. the maximum number of attempts.
    pub fn max_attempts(&self) -> usize {
        self.rows.len()
    }

    /// The number of slots per row.
    pub fn word_len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The next editable position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The grid contents, rows in attempt order.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    /// The letters of one row, if every slot in it is filled.
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.rows.get(row)?.iter().copied().collect()
    }

    /// Writes `letter` at the cursor and advances the column.
    ///
    /// Returns false without touching the grid when the current row is
    /// already full or every row has been committed.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.cursor.row >= self.max_attempts() || self.cursor.col >= self.word_len() {
            return false;
        }
        self.rows[self.cursor.row][self.cursor.col] = Some(letter);
        self.cursor.col += 1;
        true
    }

    /// Clears the slot before the cursor and steps the column back.
    ///
    /// Returns false when the current row is empty; committed rows can
    /// never be edited.
    pub fn pop_letter(&mut self) -> bool {
        if self.cursor.row >= self.max_attempts() || self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        self.rows[self.cursor.row][self.cursor.col] = None;
        true
    }

    /// Commits the current row, advancing the cursor to the next one.
    ///
    /// Only acts when the row is completely filled; there is no way to
    /// un-submit a committed row. Returns the index of the committed row.
    pub fn commit_row(&mut self) -> Option<usize> {
        if self.cursor.row >= self.max_attempts() || self.cursor.col < self.word_len() {
            return None;
        }
        let committed = self.cursor.row;
        self.cursor.row += 1;
        self.cursor.col = 0;
        Some(committed)
    }

    /// The number of attempts with at least one letter.
    ///
    /// For a finished game this is the number of guesses used, since
    /// every started row was either committed or is the (full) last row.
    pub fn attempts_used(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.first().map_or(false, Option::is_some))
            .count()
    }

    /// Splits the board back into its stored parts.
    pub(crate) fn into_parts(self) -> (Vec<Vec<Option<char>>>, Cursor) {
        (self.rows, self.cursor)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn type_word(board: &mut Board, word: &str) {
        for c in word.chars() {
            board.push_letter(c);
        }
    }

    #[test]
    fn letters_fill_left_to_right() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hel");
        assert_eq!(board.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(
            board.rows()[0],
            vec![Some('h'), Some('e'), Some('l'), None, None]
        );
    }

    #[test]
    fn a_full_row_rejects_more_letters() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hello");
        assert!(!board.push_letter('x'));
        assert_eq!(board.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(board.row_word(0).unwrap(), "hello");
    }

    #[test]
    fn clear_steps_back_and_stops_at_the_margin() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "he");
        assert!(board.pop_letter());
        assert!(board.pop_letter());
        assert!(!board.pop_letter());
        assert_eq!(board.cursor(), Cursor { row: 0, col: 0 });
        assert!(board.rows()[0].iter().all(Option::is_none));
    }

    #[test]
    fn enter_on_a_partial_row_is_a_no_op() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hell");
        assert_eq!(board.commit_row(), None);
        assert_eq!(board.cursor(), Cursor { row: 0, col: 4 });
    }

    #[test]
    fn committing_advances_to_the_next_row() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hello");
        assert_eq!(board.commit_row(), Some(0));
        assert_eq!(board.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn clear_cannot_reach_a_committed_row() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hello");
        board.commit_row();
        assert!(!board.pop_letter());
        assert_eq!(board.row_word(0).unwrap(), "hello");
    }

    #[test]
    fn a_full_board_ignores_everything() {
        let mut board = Board::new(2, 3);
        for _ in 0..2 {
            type_word(&mut board, "cat");
            board.commit_row();
        }
        assert!(!board.push_letter('x'));
        assert!(!board.pop_letter());
        assert_eq!(board.commit_row(), None);
        assert_eq!(board.cursor(), Cursor { row: 2, col: 0 });
    }

    #[test]
    fn attempts_used_counts_started_rows() {
        let mut board = Board::new(6, 5);
        type_word(&mut board, "hello");
        board.commit_row();
        type_word(&mut board, "wo");
        assert_eq!(board.attempts_used(), 2);
    }

    fn arb_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            3 => prop::char::range('a', 'z').prop_map(Key::Letter),
            1 => Just(Key::Clear),
            1 => Just(Key::Enter),
        ]
    }

    proptest! {
        // Whatever the input, letters land inside the grid and rows past
        // the cursor stay empty.
        #[test]
        fn invariants_hold_under_any_key_sequence(keys in prop::collection::vec(arb_key(), 0..200)) {
            let mut board = Board::new(6, 5);
            for key in keys {
                match key {
                    Key::Letter(c) => {
                        board.push_letter(c);
                    }
                    Key::Clear => {
                        board.pop_letter();
                    }
                    Key::Enter => {
                        board.commit_row();
                    }
                }

                let cursor = board.cursor();
                prop_assert!(cursor.row <= 6);
                prop_assert!(cursor.col <= 5);

                for (r, row) in board.rows().iter().enumerate() {
                    // Left-to-right fill: no letter after a hole.
                    let mut seen_hole = false;
                    for slot in row {
                        if slot.is_none() {
                            seen_hole = true;
                        } else {
                            prop_assert!(!seen_hole);
                        }
                    }
                    if r > cursor.row {
                        prop_assert!(row.iter().all(Option::is_none));
                    }
                }
            }
        }
    }
}
