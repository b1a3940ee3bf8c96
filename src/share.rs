//! Emoji share text for a finished (or in-flight) game.
//!
//! Pure formatting over the board and the feedback evaluator; putting
//! the text on a clipboard is the caller's business.

use itertools::Itertools;

use crate::{feedback::Feedback, Board};

/// The fixed first line of the share block.
pub const SHARE_HEADER: &str = "Wordle";

/// Renders the committed rows as lines of emoji tiles.
///
/// One line per evaluated row: 🟩 correct, 🟨 present, ⬛ absent. Rows
/// that were never committed do not appear.
///
/// # Examples
///
/// ```rust
/// use wordle_daily::{share::share_text, Board};
///
/// let mut board = Board::new(6, 5);
/// for c in "hello".chars() {
///     board.push_letter(c);
/// }
/// board.commit_row();
///
/// assert_eq!(share_text(&board, "hello"), "Wordle\n🟩🟩🟩🟩🟩");
/// ```
pub fn share_text(board: &Board, target: &str) -> String {
    let tiles = (0..board.cursor().row)
        .map(|row| {
            (0..board.word_len())
                .map(|col| match Feedback::for_cell(board, target, row, col) {
                    Feedback::Correct => '🟩',
                    Feedback::Present => '🟨',
                    _ => '⬛',
                })
                .collect::<String>()
        })
        .join("\n");

    format!("{}\n{}", SHARE_HEADER, tiles)
}
