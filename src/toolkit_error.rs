//! ToolkitError: unified error type for basics-toolkit public APIs
//!
//! Every fallible operation in the crate returns this error so that a console
//! front end can report the problem and re-prompt instead of panicking.

use thiserror::Error;

/// Unified error type for toolkit operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// Division with an exact zero divisor.
    #[error("Cannot divide by zero!")]
    DivisionByZero,
    /// A calculator menu entry or operator that does not exist.
    #[error("Unknown operation `{0}` (expected 1-4, + - * / or an operation name)")]
    UnknownOperation(String),
    /// A guessing range whose minimum is not strictly below its maximum.
    #[error("Maximum number must be greater than minimum number (got {min}..={max})")]
    InvalidRange { min: i64, max: i64 },
    /// The secret number does not lie inside the guessing range.
    #[error("Secret number {secret} lies outside {min}..={max}")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },
    /// A guess was submitted after the round had already been won.
    #[error("This round has already been won")]
    RoundAlreadyWon,
    /// Text that is not one of rock, paper or scissors.
    #[error("Invalid choice `{0}` (expected rock, paper or scissors)")]
    UnknownChoice(String),
    /// A game-mode menu entry that does not exist.
    #[error("Invalid game mode `{0}` (expected 1 or 2)")]
    UnknownGameMode(String),
    /// Best-of count that is zero or even.
    #[error("Best-of count must be a positive odd number, got {0}")]
    InvalidBestOf(u32),
    /// A round was played after the match had been decided.
    #[error("The match is already finished")]
    MatchFinished,
    /// Internal state no longer satisfies its invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
