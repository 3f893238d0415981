//! Sieve of Eratosthenes over a closed interval.

use crate::primes::primality::is_prime;
use log::{trace, warn};

/// Largest `end` for which a sieve table is allocated (4 GiB of flags).
///
/// Beyond this, or beyond what `usize` can index on the target, the sieve
/// falls back to trial division over the requested window.
pub const MAX_SIEVE_END: u64 = 1 << 32;

/// Whether a table over `0..=end` can be allocated under `max_end`.
pub fn table_fits(end: i64, max_end: u64) -> bool {
    let Ok(limit) = usize::try_from(end) else {
        return false;
    };
    // `limit + 1` flags must stay within a single allocation
    (end as u64) <= max_end && limit < isize::MAX as usize
}

/// Boolean primality table indexed `0..=limit`, owned by a single
/// enumeration call.
struct SieveTable {
    marks: Vec<bool>,
}

impl SieveTable {
    /// Build the table by striking multiples of every surviving `i <= sqrt(limit)`.
    ///
    /// Striking starts at `i * i`: smaller multiples of `i` carry a smaller
    /// prime factor and are already struck.
    fn new(limit: usize) -> Self {
        trace!("sieve: allocating table of {} entries", limit + 1);
        let mut marks = vec![true; limit + 1];
        marks[0] = false;
        if limit >= 1 {
            marks[1] = false;
        }
        let mut i = 2usize;
        while i <= limit / i {
            if marks[i] {
                for j in (i * i..=limit).step_by(i) {
                    marks[j] = false;
                }
            }
            i += 1;
        }
        Self { marks }
    }

    /// Indices in `lo..=limit` still marked prime, ascending.
    fn primes_from(&self, lo: usize) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .skip(lo)
            .filter_map(|(i, &is_prime)| is_prime.then_some(i))
    }
}

/// Enumerate all primes `p` with `max(2, start) <= p <= end`, ascending.
///
/// Runs in `O(end · log log end)` time and allocates `end + 1` booleans, which
/// are dropped before returning. Returns an empty vector when `end < 2` or
/// when `start > end`; ordering the bounds is the caller's job
/// (see [`primes_in_range`](super::primes_in_range)). When `end` exceeds
/// [`MAX_SIEVE_END`] no table is built and the window is enumerated by trial
/// division instead, so the result is the same and the call never panics.
///
/// # Example
/// ```rust
/// use basics_toolkit::primes::sieve_of_eratosthenes;
/// assert_eq!(sieve_of_eratosthenes(10, 20), vec![11, 13, 17, 19]);
/// ```
pub fn sieve_of_eratosthenes(start: i64, end: i64) -> Vec<i64> {
    if end < 2 || start > end {
        return Vec::new();
    }
    if !table_fits(end, MAX_SIEVE_END) {
        warn!("sieve: end {end} exceeds the table limit; using trial division");
        return (start.max(2)..=end).filter(|&n| is_prime(n)).collect();
    }
    // table_fits guarantees end (and so start.max(2)) fits in usize
    let table = SieveTable::new(end as usize);
    let lo = start.max(2) as usize;
    table.primes_from(lo).map(|p| p as i64).collect()
}
