//! Aggregate statistics over the saved history.

use std::{fmt::Display, ops::Deref};

use crate::{calendar::PuzzleDay, session::GameStatus, store::History};

/// A read-only aggregate of every recorded day.
///
/// Derived from the full history on demand; nothing here is stored.
///
/// # Examples
///
/// ```rust
/// use wordle_daily::{store::History, Statistics};
///
/// let stats = Statistics::from_history(&History::new(), 6);
/// assert_eq!(stats.played(), 0);
/// assert_eq!(stats.win_rate(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    played: u32,
    won: u32,
    current_streak: u32,
    max_streak: u32,
    distribution: Histogram,
}

impl Statistics {
    /// Computes statistics over `history`.
    ///
    /// `max_attempts` sizes the guess distribution, one bucket per
    /// possible attempt count.
    pub fn from_history(history: &History, max_attempts: usize) -> Self {
        let mut won = 0;
        let mut current_streak = 0;
        let mut max_streak = 0;
        let mut bins = vec![0; max_attempts];
        let mut prev_day: Option<PuzzleDay> = None;

        // BTreeMap iteration is already in calendar order.
        for (day, record) in history {
            if record.status() == GameStatus::Won {
                won += 1;

                // An adjacent win extends the streak; a win after a gap
                // resets a running streak to zero and only starts a new
                // one when nothing was running.
                let adjacent = prev_day.map_or(true, |prev| day.follows(&prev));
                current_streak = if current_streak == 0 {
                    1
                } else if adjacent {
                    current_streak + 1
                } else {
                    0
                };
                max_streak = max_streak.max(current_streak);

                let attempts = record.attempts_used();
                if attempts >= 1 && attempts <= max_attempts {
                    bins[attempts - 1] += 1;
                }
            } else {
                current_streak = 0;
            }
            prev_day = Some(*day);
        }

        Statistics {
            played: history.len() as u32,
            won,
            current_streak,
            max_streak,
            distribution: Histogram { bins },
        }
    }

    /// The number of days with a record.
    pub fn played(&self) -> u32 {
        self.played
    }

    /// The number of won days.
    pub fn won(&self) -> u32 {
        self.won
    }

    /// The win percentage, floored, 0 when nothing was played.
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            100 * self.won / self.played
        }
    }

    /// The streak of consecutive won days ending at the last record.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// The longest streak anywhere in the history.
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Win counts bucketed by the number of attempts used.
    pub fn distribution(&self) -> &Histogram {
        &self.distribution
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^40}", " statistics ")?;
        writeln!(
            f,
            "Played {}, won {} ({}%)",
            self.played,
            self.won,
            self.win_rate()
        )?;
        writeln!(
            f,
            "Current streak {}, max streak {}",
            self.current_streak, self.max_streak
        )?;
        write!(f, "{}", self.distribution)?;
        Ok(())
    }
}

/// Win counts indexed by attempts used, bucket `n` holding wins in
/// `n + 1` guesses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<u32>,
}

impl Deref for Histogram {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().copied().max().unwrap_or(0).max(1);
        let count_per_mark = (max as f32 / 30.0).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{} |{:#>marks$} ({})", i + 1, "", bin)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        board::Key,
        store::{DailyRecord, History},
        GameConfig, GameSession,
    };

    fn config() -> GameConfig {
        GameConfig::new().word_list(vec!["hello".into()])
    }

    // Plays day `key` to completion with `guesses`, returning its record.
    fn record(key: &str, guesses: &[&str]) -> DailyRecord {
        let mut session = GameSession::new(&config(), key.parse().unwrap()).unwrap();
        for guess in guesses {
            for c in guess.chars() {
                session.press(Key::Letter(c));
            }
            session.press(Key::Enter);
        }
        session.to_record()
    }

    fn won(key: &str, attempts: usize) -> (PuzzleDay, DailyRecord) {
        let mut guesses = vec!["world"; attempts - 1];
        guesses.push("hello");
        (key.parse().unwrap(), record(key, &guesses))
    }

    fn lost(key: &str) -> (PuzzleDay, DailyRecord) {
        (key.parse().unwrap(), record(key, &["world"; 6]))
    }

    #[test]
    fn empty_history_is_all_zeroes() {
        let stats = Statistics::from_history(&History::new(), 6);
        assert_eq!(stats.played(), 0);
        assert_eq!(stats.won(), 0);
        assert_eq!(stats.win_rate(), 0);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 0);
        assert_eq!(**stats.distribution(), *vec![0; 6]);
    }

    #[test]
    fn win_rate_floors() {
        let history: History =
            [won("2022-1", 1), won("2022-2", 2), lost("2022-3")].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.played(), 3);
        // 2/3 floors to 66.
        assert_eq!(stats.win_rate(), 66);
    }

    #[test]
    fn streaks_break_on_a_loss() {
        // The worked example: won, won, lost, won.
        let history: History = [
            won("2022-1", 2),
            won("2022-2", 3),
            lost("2022-3"),
            won("2022-4", 1),
        ]
        .into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn a_win_after_a_gap_resets_a_running_streak() {
        let history: History = [won("2022-1", 1), won("2022-2", 1), won("2022-5", 1)].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn a_win_after_a_gap_starts_fresh_when_nothing_was_running() {
        let history: History = [lost("2022-1"), won("2022-4", 1), won("2022-5", 1)].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn streaks_continue_across_the_year_boundary() {
        let history: History = [won("2021-365", 1), won("2022-1", 1)].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.current_streak(), 2);
    }

    #[test]
    fn distribution_buckets_by_attempts_used() {
        let history: History = [won("2022-1", 3), won("2022-2", 5), lost("2022-3")].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(**stats.distribution(), [0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn losses_do_not_enter_the_distribution() {
        let history: History = [lost("2022-1"), lost("2022-2")].into();
        let stats = Statistics::from_history(&history, 6);
        assert_eq!(stats.played(), 2);
        assert!(stats.distribution().iter().all(|&bin| bin == 0));
    }
}
