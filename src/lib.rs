//! Guess Game - a terminal number guessing game
//!
//! Core modules:
//! - `round`: Round engine (secret, attempt budget, per-guess feedback)
//! - `highscores`: Per-difficulty best scores persisted to a JSON file
//! - `difficulty`: The fixed difficulty tiers and their budgets
//! - `prompt`: Line-based input prompting
//! - `menu`: Menu loop wiring the pieces together
//! - `settings`: Runtime configuration

pub mod difficulty;
pub mod highscores;
pub mod menu;
pub mod prompt;
pub mod round;
pub mod settings;

pub use difficulty::Difficulty;
pub use highscores::{HighScoreStore, HighScores};
pub use prompt::{Aborted, Prompter};
pub use round::{Direction, GuessOutcome, Proximity, Round, RoundResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Smallest possible secret / guess
    pub const SECRET_MIN: u32 = 1;
    /// Largest possible secret / guess
    pub const SECRET_MAX: u32 = 100;

    /// Distance at or below which a guess is "very close"
    pub const VERY_CLOSE_MAX: u32 = 5;
    /// Distance at or below which a guess is "getting warm"
    pub const GETTING_WARM_MAX: u32 = 10;

    /// Default highscore file, relative to the working directory
    pub const HIGHSCORE_FILE: &str = "guess_highscore.json";
}

/// Returns true if `value` lies in the secret range
#[inline]
pub fn in_secret_range(value: u32) -> bool {
    (consts::SECRET_MIN..=consts::SECRET_MAX).contains(&value)
}
