//! Per-letter feedback on committed guesses.
//!
//! Feedback is always derived from the board, the target word, and the
//! cursor position; it is never stored. Rows at or past the cursor row
//! have not been locked in by a submit yet and grade as
//! [`Feedback::Unevaluated`].
//!
//! Grading is a positional check followed by a membership check. When a
//! guess repeats a letter the target contains once, both copies can grade
//! [`Feedback::Present`]; multiset accounting is deliberately not
//! performed (see the repository design notes).

use std::collections::BTreeSet;

use crate::Board;

/// The classification of one slot relative to the target word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// The slot's row has not been committed, or the slot is empty.
    Unevaluated,
    /// The letter is in the target word at this exact position.
    Correct,
    /// The letter is somewhere in the target word, but not here.
    Present,
    /// The letter is not in the target word.
    Absent,
}

impl Feedback {
    /// Grades the slot at (`row`, `col`) against `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_daily::{Board, Feedback};
    ///
    /// let mut board = Board::new(6, 5);
    /// for c in "ratio".chars() {
    ///     board.push_letter(c);
    /// }
    /// board.commit_row();
    ///
    /// assert_eq!(Feedback::for_cell(&board, "earth", 0, 0), Feedback::Present);
    /// assert_eq!(Feedback::for_cell(&board, "earth", 0, 1), Feedback::Correct);
    /// assert_eq!(Feedback::for_cell(&board, "earth", 0, 4), Feedback::Absent);
    /// ```
    pub fn for_cell(board: &Board, target: &str, row: usize, col: usize) -> Feedback {
        if row >= board.cursor().row {
            return Feedback::Unevaluated;
        }

        let letter = match board.rows().get(row).and_then(|r| r.get(col)) {
            Some(Some(letter)) => *letter,
            _ => return Feedback::Unevaluated,
        };

        if target.chars().nth(col) == Some(letter) {
            Feedback::Correct
        } else if target.contains(letter) {
            Feedback::Present
        } else {
            Feedback::Absent
        }
    }
}

/// Grades the whole board, row-major.
pub fn grade(board: &Board, target: &str) -> Vec<Vec<Feedback>> {
    (0..board.max_attempts())
        .map(|row| {
            (0..board.word_len())
                .map(|col| Feedback::for_cell(board, target, row, col))
                .collect()
        })
        .collect()
}

/// The letter sets an on-screen keyboard colors its keys with.
///
/// Each set collects the letters of committed guesses that graded to the
/// corresponding feedback. The sets can overlap, matching how the
/// keyboard treats a letter that graded differently in different slots;
/// display layers resolve overlap with correct > present > absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    pub correct: BTreeSet<char>,
    pub present: BTreeSet<char>,
    pub absent: BTreeSet<char>,
}

/// Collects [`KeyboardHints`] from every committed row of the board.
pub fn keyboard_hints(board: &Board, target: &str) -> KeyboardHints {
    let mut hints = KeyboardHints::default();
    for (row, slots) in board.rows().iter().enumerate() {
        for (col, slot) in slots.iter().enumerate() {
            let letter = match slot {
                Some(letter) => *letter,
                None => continue,
            };
            match Feedback::for_cell(board, target, row, col) {
                Feedback::Correct => hints.correct.insert(letter),
                Feedback::Present => hints.present.insert(letter),
                Feedback::Absent => hints.absent.insert(letter),
                Feedback::Unevaluated => continue,
            };
        }
    }
    hints
}
