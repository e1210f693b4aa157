//! Front ends: a line-oriented text console and a terminal UI built with
//! Ratatui. Both drive the same [`Session`](crate::game::Session).

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::Console;

use crate::ai::{MoveSource, RandomMoveSource};

/// Which front end drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Frontend {
    /// Plain text prompts on stdin/stdout
    Console,
    /// Full-screen terminal UI
    Tui,
}

/// Builds the move source for each new game against the computer.
pub type OpponentFactory = Box<dyn FnMut() -> Box<dyn MoveSource>>;

/// Random opponents. With a seed, game `n` uses `seed + n` so replays are
/// reproducible without every game being identical.
pub fn opponent_factory(seed: Option<u64>) -> OpponentFactory {
    let mut games: u64 = 0;
    Box::new(move || {
        let source = match seed {
            Some(seed) => RandomMoveSource::seeded(seed.wrapping_add(games)),
            None => RandomMoveSource::new(),
        };
        games += 1;
        Box::new(source)
    })
}
