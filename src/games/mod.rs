//! Game state for the console games.
//!
//! Randomness stays with the caller: the guessing game is built with its
//! secret number and rock-paper-scissors rounds receive the computer's
//! choice, which keeps every type here deterministic.

pub mod guessing;
pub mod rps;

pub use guessing::{GuessOutcome, GuessingGame};
pub use rps::{Choice, GameMode, Player, RoundOutcome, RpsMatch, Score, determine_winner};
