//! Prime classification and range enumeration.
//!
//! Three layers, leaf first:
//! - [`primality`]: single-integer trial division.
//! - [`sieve`]: Sieve of Eratosthenes over `0..=end`.
//! - [`range`]: strategy selection between the two, the crate's entry point
//!   for enumerating primes in a closed interval.
//!
//! [`grid`] renders the result as a two-symbol text grid for console output.

pub mod grid;
pub mod primality;
pub mod range;
pub mod sieve;

pub use grid::{GridOptions, PrimeGrid};
pub use primality::is_prime;
pub use range::{
    DEFAULT_SIEVE_THRESHOLD, RangeConfig, RangeStrategy, primes_in_range, primes_in_range_using,
    primes_in_range_with,
};
pub use sieve::{MAX_SIEVE_END, sieve_of_eratosthenes};
