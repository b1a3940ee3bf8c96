//! A terminal front end for the daily game.
//!
//! Renders the board with ANSI colors, reads whole-word guesses from
//! stdin, and persists progress to a JSON save file after every
//! committed row.

use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use chrono::Local;
use clap::Parser;
use owo_colors::{AnsiColors, OwoColorize, Stream};
use rand::seq::SliceRandom;

use wordle_daily::{
    calendar::seconds_until_next_puzzle,
    feedback::{keyboard_hints, Feedback},
    share::share_text,
    store::FileStore,
    words, Board, GameConfig, GameSession, GameStore, Key, Press, PuzzleDay,
    Statistics,
};

#[derive(Debug, Parser)]
#[command(version, about = "Play the daily word puzzle in your terminal")]
struct Cli {
    /// Where to keep saved games.
    #[arg(long, default_value = "wordle_save.json")]
    store: PathBuf,

    /// Play a random practice word instead of today's puzzle.
    ///
    /// Practice games are not saved and do not count toward streaks.
    #[arg(long)]
    random: bool,

    /// Print statistics over the saved history and exit.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new();
    let mut store = GameStore::new(FileStore::new(&cli.store));

    if cli.stats {
        let history = store.load_or_default();
        print!(
            "{}",
            Statistics::from_history(&history, config.max_attempts())
        );
        return Ok(());
    }

    let day = PuzzleDay::today();
    let mut session = if cli.random {
        practice_session(day)?
    } else {
        let history = store.load_or_default();
        match history.get(&day) {
            Some(record) => match GameSession::resume(&config, day, record.clone()) {
                Ok(session) => {
                    log::info!("resuming saved game for {}", day);
                    session
                }
                Err(e) => {
                    log::warn!("discarding unusable saved game for {}: {}", day, e);
                    GameSession::new(&config, day)?
                }
            },
            None => GameSession::new(&config, day)?,
        }
    };

    if session.status().is_over() {
        println!("You already finished today's puzzle.");
        end_screen(&session, &store);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&session);
        print!("guess> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let guess = line.trim().to_ascii_lowercase();

        if guess.chars().count() != session.board().word_len()
            || !guess.chars().all(|c| c.is_ascii_alphabetic())
        {
            println!(
                "Guesses are {} letters, a-z only.",
                session.board().word_len()
            );
            continue;
        }

        for c in guess.chars() {
            session.press(Key::Letter(c));
        }
        if let Press::Committed { .. } = session.press(Key::Enter) {
            if !cli.random {
                store.record_day(session.day(), session.to_record())?;
            }
        }

        if session.status().is_over() {
            render(&session);
            end_screen(&session, &store);
            return Ok(());
        }
    }
}

/// A throwaway session on a randomly chosen word.
fn practice_session(day: PuzzleDay) -> wordle_daily::Result<GameSession> {
    let mut rng = rand::thread_rng();
    let word = words::ANSWERS
        .choose(&mut rng)
        .expect("the built-in answer list is not empty");
    let config = GameConfig::new().word_list(vec![word.to_string()]);
    GameSession::new(&config, day)
}

fn tile(letter: Option<char>, feedback: Feedback) -> String {
    let shown = letter.map_or('·', |c| c.to_ascii_uppercase());
    let color = match feedback {
        Feedback::Correct => AnsiColors::Green,
        Feedback::Present => AnsiColors::Yellow,
        Feedback::Absent => AnsiColors::BrightBlack,
        Feedback::Unevaluated => AnsiColors::Default,
    };
    format!(
        " {} ",
        shown.if_supports_color(Stream::Stdout, |c| c.color(color))
    )
}

fn render(session: &GameSession) {
    let board = session.board();
    println!();
    for (row, slots) in board.rows().iter().enumerate() {
        let line: String = slots
            .iter()
            .enumerate()
            .map(|(col, &slot)| {
                tile(slot, Feedback::for_cell(board, session.target(), row, col))
            })
            .collect();
        println!("{}", line);
    }
    print_hints(board, session.target());
}

fn print_hints(board: &Board, target: &str) {
    let hints = keyboard_hints(board, target);
    if hints.correct.is_empty() && hints.present.is_empty() && hints.absent.is_empty() {
        return;
    }

    let colored = ('a'..='z')
        .map(|c| {
            // Correct beats present beats absent when a letter shows up
            // in more than one set.
            let color = if hints.correct.contains(&c) {
                AnsiColors::Green
            } else if hints.present.contains(&c) {
                AnsiColors::Yellow
            } else if hints.absent.contains(&c) {
                AnsiColors::BrightBlack
            } else {
                AnsiColors::Default
            };
            format!(
                "{}",
                c.if_supports_color(Stream::Stdout, move |c| c.color(color))
            )
        })
        .collect::<String>();
    println!("  {}", colored);
}

fn end_screen(session: &GameSession, store: &GameStore<FileStore>) {
    match session.status() {
        wordle_daily::GameStatus::Won => println!("\nCongrats!"),
        _ => println!("\nMeh, try again tomorrow. The word was \"{}\".", session.target()),
    }

    let history = store.load_or_default();
    print!(
        "{}",
        Statistics::from_history(&history, session.board().max_attempts())
    );

    println!("\n{}", share_text(session.board(), session.target()));

    let secs = seconds_until_next_puzzle(Local::now().naive_local());
    println!(
        "\nNext puzzle in {}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    );
}
