//! Round engine
//!
//! One round runs from secret selection to a win or an exhausted budget.
//! This module holds no I/O; the menu drives it through the prompter.
//! - Guesses must already be validated to lie in the secret range
//! - Each accepted guess counts exactly once
//! - The secret is only revealed after exhaustion

pub mod feedback;
pub mod state;

pub use feedback::{Direction, Proximity};
pub use state::{GuessOutcome, Round, RoundPhase, RoundResult};
