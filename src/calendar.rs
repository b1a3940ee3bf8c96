//! Calendar identity for daily puzzles.
//!
//! Every saved game is keyed by the day it was played, and streak
//! computation needs to ask whether two played days are adjacent. Both
//! concerns go through [`PuzzleDay`] so that "day" arithmetic is defined
//! in exactly one place, including across year boundaries.

use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::PuzzleError;

/// A calendar day identifying one daily puzzle.
///
/// A `PuzzleDay` is a year plus a 1-based day-of-year ordinal. Instances
/// can only be created from a real calendar date or by parsing a storage
/// key, so an invalid combination like day 366 of a non-leap year is
/// unrepresentable.
///
/// The [`Display`] and [`FromStr`] impls use the `"<year>-<ordinal>"`
/// format that keys the saved-game map, and serde goes through the same
/// string form so the day can serve as a JSON map key.
///
/// # Examples
///
/// ```rust
/// use wordle_daily::PuzzleDay;
///
/// let day: PuzzleDay = "2022-32".parse()?;
/// assert_eq!(day.year(), 2022);
/// assert_eq!(day.ordinal(), 32);
/// assert_eq!(day.to_string(), "2022-32");
/// #
/// # Ok::<_, wordle_daily::PuzzleError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDay {
    year: i32,
    ordinal: u16,
}

impl PuzzleDay {
    /// Returns the puzzle day for the current local date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Creates a puzzle day from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        PuzzleDay {
            year: date.year(),
            ordinal: date.ordinal() as u16,
        }
    }

    /// The calendar year this day falls in.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based day-of-year ordinal.
    pub fn ordinal(&self) -> u16 {
        self.ordinal
    }

    /// Returns true if `self` is the calendar day immediately after `prev`.
    ///
    /// Works across year boundaries, so December 31 is followed by
    /// January 1 of the next year.
    ///
    /// ```rust
    /// use wordle_daily::PuzzleDay;
    ///
    /// let dec31: PuzzleDay = "2021-365".parse()?;
    /// let jan1: PuzzleDay = "2022-1".parse()?;
    /// assert!(jan1.follows(&dec31));
    /// assert!(!dec31.follows(&jan1));
    /// #
    /// # Ok::<_, wordle_daily::PuzzleError>(())
    /// ```
    pub fn follows(&self, prev: &PuzzleDay) -> bool {
        match prev.to_date().succ_opt() {
            Some(next) => Self::from_date(next) == *self,
            None => false,
        }
    }

    fn to_date(self) -> NaiveDate {
        // Safe because construction goes through a valid NaiveDate.
        NaiveDate::from_yo_opt(self.year, self.ordinal as u32)
            .expect("PuzzleDay always holds a valid (year, ordinal) pair")
    }
}

impl Display for PuzzleDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.ordinal)
    }
}

impl FromStr for PuzzleDay {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PuzzleError::InvalidDayKey(s.to_string());

        let (year, ordinal) = s.split_once('-').ok_or_else(bad)?;
        let year: i32 = year.parse().map_err(|_| bad())?;
        let ordinal: u32 = ordinal.parse().map_err(|_| bad())?;

        // Round-tripping through NaiveDate rejects ordinals the calendar
        // does not have, like day 366 of a common year.
        NaiveDate::from_yo_opt(year, ordinal)
            .map(Self::from_date)
            .ok_or_else(bad)
    }
}

impl Serialize for PuzzleDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PuzzleDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(de::Error::custom)
    }
}

/// Returns the number of seconds until the next puzzle unlocks.
///
/// The next puzzle unlocks at the next local midnight after `now`.
pub fn seconds_until_next_puzzle(now: NaiveDateTime) -> u64 {
    let midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("tomorrow at midnight exists");
    (midnight - now).num_seconds().max(0) as u64
}
