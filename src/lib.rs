#![cfg_attr(docsrs, feature(doc_cfg))]
//! # basics-toolkit
//!
//! basics-toolkit collects the pure, well-typed cores behind a set of small
//! console exercises. Every public operation is a synchronous function or a
//! small owned state machine; console prompts, randomness and rendering to a
//! terminal are left to the caller.
//!
//! ## Modules
//! - [`primes`]: primality testing, range enumeration by trial division or
//!   the Sieve of Eratosthenes, and a two-symbol grid view.
//! - [`calculator`]: four checked arithmetic operations and result formatting.
//! - [`games`]: number-guessing rounds and best-of-N rock-paper-scissors.
//! - [`password`]: rule-based password strength scoring and suggestions.
//!
//! ## Errors and logging
//! Fallible operations return [`ToolkitError`](toolkit_error::ToolkitError).
//! Diagnostics go through the [`log`] facade; install any logger to see them.
//!
//! ## Usage
//! ```rust
//! use basics_toolkit::prelude::*;
//!
//! assert!(is_prime(97));
//! assert_eq!(primes_in_range(20, 10), vec![11, 13, 17, 19]);
//! assert_eq!(Operation::Division.apply(1.0, 0.0), Err(ToolkitError::DivisionByZero));
//! ```

pub mod calculator;
pub mod debug_invariants;
pub mod games;
pub mod password;
pub mod primes;
pub mod toolkit_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::calculator::{Calculation, Operation, format_number};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::games::{
        Choice, GameMode, GuessOutcome, GuessingGame, Player, RoundOutcome, RpsMatch, Score,
        determine_winner,
    };
    pub use crate::password::{
        Feedback, PasswordPolicy, StrengthLevel, StrengthReport, check_strength,
        check_strength_with, suggest_improvements, suggest_improvements_with,
    };
    pub use crate::primes::{
        GridOptions, PrimeGrid, RangeConfig, RangeStrategy, is_prime, primes_in_range,
        primes_in_range_using, primes_in_range_with, sieve_of_eratosthenes,
    };
    pub use crate::toolkit_error::ToolkitError;
}
