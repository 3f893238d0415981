//! Range enumeration with size-based strategy selection.
//!
//! Small ranges are enumerated by repeated trial division, which needs no
//! table; wide ranges go through the sieve, which amortizes better. The
//! threshold only affects cost: both strategies return the same primes.

use crate::primes::primality::is_prime;
use crate::primes::sieve::{MAX_SIEVE_END, sieve_of_eratosthenes, table_fits};
use log::debug;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Widest range (`end - start`) still enumerated by trial division.
pub const DEFAULT_SIEVE_THRESHOLD: u64 = 1000;

const_assert!(DEFAULT_SIEVE_THRESHOLD > 0);

/// Tuning for [`primes_in_range_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Ranges wider than this are enumerated with the sieve.
    pub sieve_threshold: u64,
    /// Largest `end` the sieve may allocate a table for; wider ranges ending
    /// above it use trial division.
    pub max_sieve_end: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            sieve_threshold: DEFAULT_SIEVE_THRESHOLD,
            max_sieve_end: MAX_SIEVE_END,
        }
    }
}

/// How a range is enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeStrategy {
    /// One [`is_prime`] call per candidate; no allocation beyond the result.
    TrialDivision,
    /// [`sieve_of_eratosthenes`] over `0..=end`.
    Sieve,
}

impl RangeStrategy {
    /// Pick the cheaper strategy for `[start, end]` (bounds in either order).
    ///
    /// The sieve is only chosen when its `0..=end` table fits under
    /// `cfg.max_sieve_end` and the platform's address space.
    pub fn select(start: i64, end: i64, cfg: &RangeConfig) -> Self {
        let hi = start.max(end);
        if start.abs_diff(end) <= cfg.sieve_threshold || !table_fits(hi, cfg.max_sieve_end) {
            RangeStrategy::TrialDivision
        } else {
            RangeStrategy::Sieve
        }
    }
}

#[inline]
fn ordered(start: i64, end: i64) -> (i64, i64) {
    if start > end { (end, start) } else { (start, end) }
}

fn trial_division(start: i64, end: i64) -> Vec<i64> {
    if end < 2 {
        return Vec::new();
    }
    (start.max(2)..=end).filter(|&n| is_prime(n)).collect()
}

/// All primes in the closed interval spanned by `start` and `end`, ascending.
///
/// Bounds may be given in either order. Uses [`DEFAULT_SIEVE_THRESHOLD`] to
/// choose the strategy.
///
/// # Example
/// ```rust
/// use basics_toolkit::primes::primes_in_range;
/// assert_eq!(primes_in_range(10, 20), vec![11, 13, 17, 19]);
/// assert_eq!(primes_in_range(20, 10), vec![11, 13, 17, 19]);
/// assert!(primes_in_range(0, 1).is_empty());
/// ```
pub fn primes_in_range(start: i64, end: i64) -> Vec<i64> {
    primes_in_range_with(start, end, &RangeConfig::default())
}

/// [`primes_in_range`] with an explicit strategy threshold.
pub fn primes_in_range_with(start: i64, end: i64, cfg: &RangeConfig) -> Vec<i64> {
    let (start, end) = ordered(start, end);
    let strategy = RangeStrategy::select(start, end, cfg);
    debug!(
        "primes_in_range: [{start}, {end}] via {strategy:?} (threshold {})",
        cfg.sieve_threshold
    );
    primes_in_range_using(start, end, strategy)
}

/// Enumerate `[start, end]` (either order) with a forced strategy.
pub fn primes_in_range_using(start: i64, end: i64, strategy: RangeStrategy) -> Vec<i64> {
    let (start, end) = ordered(start, end);
    match strategy {
        RangeStrategy::TrialDivision => trial_division(start, end),
        RangeStrategy::Sieve => sieve_of_eratosthenes(start, end),
    }
}
