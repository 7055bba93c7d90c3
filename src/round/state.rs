//! Round state and the guess state machine

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::feedback::{Direction, Proximity};
use crate::consts::{SECRET_MAX, SECRET_MIN};
use crate::in_secret_range;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting guesses
    Playing,
    /// Secret was guessed
    Won,
    /// Budget spent without a correct guess
    Exhausted,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess; the round goes on
    Continue {
        direction: Direction,
        proximity: Proximity,
    },
    /// Correct guess after `attempts` counted guesses
    Won { attempts: u32 },
    /// Budget was already spent; the guess was not counted
    Exhausted,
}

/// Final result of a concluded round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won { attempts: u32 },
    /// Budget exhausted. Never recorded as a highscore.
    Forfeited,
}

impl RoundResult {
    /// Attempt count for a won round
    pub fn attempts(&self) -> Option<u32> {
        match self {
            RoundResult::Won { attempts } => Some(*attempts),
            RoundResult::Forfeited => None,
        }
    }

    /// Ordering key: fewer attempts is better, a forfeit is worse than any win
    pub fn is_better_than(&self, other: &RoundResult) -> bool {
        match (self, other) {
            (RoundResult::Won { attempts: a }, RoundResult::Won { attempts: b }) => a < b,
            (RoundResult::Won { .. }, RoundResult::Forfeited) => true,
            (RoundResult::Forfeited, _) => false,
        }
    }
}

/// One round of the game
#[derive(Clone)]
pub struct Round {
    secret: u32,
    attempts: u32,
    budget: Option<u32>,
    phase: RoundPhase,
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("secret", &self.reveal_secret())
            .field("attempts", &self.attempts)
            .field("budget", &self.budget)
            .field("phase", &self.phase)
            .finish()
    }
}

impl Round {
    /// Start a round with a secret drawn from the thread RNG
    pub fn new(budget: Option<u32>) -> Self {
        Self::with_rng(budget, &mut rand::rng())
    }

    /// Start a reproducible round
    pub fn seeded(budget: Option<u32>, seed: u64) -> Self {
        Self::with_rng(budget, &mut Pcg32::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(budget: Option<u32>, rng: &mut R) -> Self {
        let secret = rng.random_range(SECRET_MIN..=SECRET_MAX);
        log::debug!("Round started (budget: {:?})", budget);
        Self::with_secret(secret, budget)
    }

    /// Start a round with a known secret
    pub fn with_secret(secret: u32, budget: Option<u32>) -> Self {
        assert!(in_secret_range(secret), "secret {secret} out of range");
        assert!(budget != Some(0), "attempt budget must be positive");
        Self {
            secret,
            attempts: 0,
            budget,
            phase: RoundPhase::Playing,
        }
    }

    /// Counted guesses so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn budget(&self) -> Option<u32> {
        self.budget
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Guesses left before exhaustion (None = unlimited)
    pub fn remaining(&self) -> Option<u32> {
        self.budget.map(|b| b.saturating_sub(self.attempts))
    }

    fn budget_spent(&self) -> bool {
        self.budget.is_some_and(|b| self.attempts >= b)
    }

    /// Mark the round exhausted if its budget is spent.
    ///
    /// This is the same check `submit_guess` runs before counting a guess, so
    /// callers can use it to stop before asking for a guess that would not count.
    pub fn check_exhausted(&mut self) -> bool {
        if self.phase == RoundPhase::Playing && self.budget_spent() {
            log::debug!("Round exhausted after {} attempts", self.attempts);
            self.phase = RoundPhase::Exhausted;
        }
        self.phase == RoundPhase::Exhausted
    }

    /// Submit a guess in the secret range.
    ///
    /// Panics if the guess is out of range or the round was already won.
    pub fn submit_guess(&mut self, guess: u32) -> GuessOutcome {
        assert!(in_secret_range(guess), "guess {guess} out of range");
        assert!(
            self.phase != RoundPhase::Won,
            "guess submitted after the round was won"
        );

        if self.check_exhausted() {
            return GuessOutcome::Exhausted;
        }

        self.attempts += 1;
        match Direction::of(guess, self.secret) {
            None => {
                self.phase = RoundPhase::Won;
                GuessOutcome::Won {
                    attempts: self.attempts,
                }
            }
            Some(direction) => GuessOutcome::Continue {
                direction,
                proximity: Proximity::between(guess, self.secret),
            },
        }
    }

    /// Final result, once the round has concluded
    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            RoundPhase::Playing => None,
            RoundPhase::Won => Some(RoundResult::Won {
                attempts: self.attempts,
            }),
            RoundPhase::Exhausted => Some(RoundResult::Forfeited),
        }
    }

    /// The secret, only available after exhaustion
    pub fn reveal_secret(&self) -> Option<u32> {
        (self.phase == RoundPhase::Exhausted).then_some(self.secret)
    }
}
