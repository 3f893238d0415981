//! Number guessing: one round against a fixed secret.

use crate::debug_invariants::DebugInvariants;
use crate::toolkit_error::ToolkitError;
use std::fmt;

/// Result of a single guess.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The guess lies outside the game's bounds (it still counts as an attempt).
    OutOfRange { min: i64, max: i64 },
    TooLow,
    TooHigh,
    /// The secret was found after `attempts` guesses.
    Correct { attempts: u32 },
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::OutOfRange { min, max } => {
                write!(f, "Please guess a number between {min} and {max}.")
            }
            GuessOutcome::TooLow => f.write_str("Too low!"),
            GuessOutcome::TooHigh => f.write_str("Too high!"),
            GuessOutcome::Correct { attempts } => {
                let noun = if *attempts == 1 { "guess" } else { "guesses" };
                write!(
                    f,
                    "Congratulations! You've guessed the number in {attempts} {noun}!"
                )
            }
        }
    }
}

/// State of one guessing round over the inclusive range `min..=max`.
#[derive(Clone, Debug)]
pub struct GuessingGame {
    min: i64,
    max: i64,
    secret: i64,
    attempts: u32,
    won: bool,
}

impl GuessingGame {
    /// Start a round. `min` must be strictly below `max` and the secret must
    /// lie within the range.
    pub fn new(min: i64, max: i64, secret: i64) -> Result<Self, ToolkitError> {
        let game = Self {
            min,
            max,
            secret,
            attempts: 0,
            won: false,
        };
        game.validate_invariants()?;
        Ok(game)
    }

    /// Submit a guess. Every call before the round is won counts as an attempt.
    pub fn guess(&mut self, n: i64) -> Result<GuessOutcome, ToolkitError> {
        if self.won {
            return Err(ToolkitError::RoundAlreadyWon);
        }
        self.attempts = self.attempts.saturating_add(1);
        let outcome = if n < self.min || n > self.max {
            GuessOutcome::OutOfRange {
                min: self.min,
                max: self.max,
            }
        } else if n < self.secret {
            GuessOutcome::TooLow
        } else if n > self.secret {
            GuessOutcome::TooHigh
        } else {
            self.won = true;
            log::debug!("guessing: secret found after {} attempts", self.attempts);
            GuessOutcome::Correct {
                attempts: self.attempts,
            }
        };
        crate::debug_invariants!(self.validate_invariants(), "GuessingGame::guess");
        Ok(outcome)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Opening line announced to the player.
    pub fn intro(&self) -> String {
        format!(
            "I'm thinking of a number between {} and {}.",
            self.min, self.max
        )
    }
}

impl DebugInvariants for GuessingGame {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "GuessingGame");
    }

    fn validate_invariants(&self) -> Result<(), ToolkitError> {
        if self.min >= self.max {
            return Err(ToolkitError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.secret < self.min || self.secret > self.max {
            return Err(ToolkitError::SecretOutOfRange {
                secret: self.secret,
                min: self.min,
                max: self.max,
            });
        }
        if self.won && self.attempts == 0 {
            return Err(ToolkitError::InvariantViolation(
                "round won without any attempt".into(),
            ));
        }
        Ok(())
    }
}
