//! Two-symbol text grid of the primes in a range.

use crate::primes::range::primes_in_range;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout and symbols for a [`PrimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Cells per row; `0` is treated as `1`.
    pub columns: usize,
    /// Cell printed for a prime.
    pub prime_symbol: char,
    /// Cell printed for any other integer.
    pub composite_symbol: char,
    /// Ranges wider than this are reported by [`GridOptions::is_large`].
    pub large_range_warning: u64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 10,
            prime_symbol: '🟢',
            composite_symbol: '⚪',
            large_range_warning: 200,
        }
    }
}

impl GridOptions {
    /// Plain ASCII symbols (`#` for primes, `.` otherwise).
    pub fn ascii() -> Self {
        Self {
            prime_symbol: '#',
            composite_symbol: '.',
            ..Self::default()
        }
    }

    /// Whether `[start, end]` is too wide to read comfortably as a grid.
    pub fn is_large(&self, start: i64, end: i64) -> bool {
        start.abs_diff(end) > self.large_range_warning
    }
}

/// The primes of `[start, end]` laid out one cell per integer.
#[derive(Debug, Clone)]
pub struct PrimeGrid {
    start: i64,
    end: i64,
    primes: Vec<i64>,
    options: GridOptions,
}

impl PrimeGrid {
    /// Compute the grid for `[start, end]` (bounds in either order).
    pub fn new(start: i64, end: i64, options: GridOptions) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        if options.is_large(start, end) {
            warn!(
                "prime grid over [{start}, {end}] exceeds {} cells; output may be hard to read",
                options.large_range_warning
            );
        }
        Self {
            start,
            end,
            primes: primes_in_range(start, end),
            options,
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    pub fn primes(&self) -> &[i64] {
        &self.primes
    }

    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Heading line printed above the grid.
    pub fn heading(&self) -> String {
        format!("Prime numbers between {} and {}:", self.start, self.end)
    }

    /// Closing line reporting how many primes were found.
    pub fn summary(&self) -> String {
        format!("Found {} prime numbers in this range.", self.prime_count())
    }

    fn symbol_for(&self, n: i64) -> char {
        // primes is ascending, so membership is a binary search
        if self.primes.binary_search(&n).is_ok() {
            self.options.prime_symbol
        } else {
            self.options.composite_symbol
        }
    }
}

impl fmt::Display for PrimeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.options.columns.max(1);
        let cells = (self.start..=self.end).map(|n| self.symbol_for(n));
        for row in &cells.chunks(columns) {
            writeln!(f, "{}", row.format(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_grid_rows_of_ten() {
        let grid = PrimeGrid::new(1, 20, GridOptions::ascii());
        assert_eq!(
            grid.to_string(),
            ". # # . # . # . . .\n# . # . . . # . # .\n"
        );
        assert_eq!(grid.prime_count(), 8);
        assert_eq!(grid.summary(), "Found 8 prime numbers in this range.");
    }

    #[test]
    fn partial_last_row() {
        let opts = GridOptions {
            columns: 4,
            ..GridOptions::ascii()
        };
        let grid = PrimeGrid::new(10, 15, opts);
        assert_eq!(grid.to_string(), ". # . #\n. .\n");
    }

    #[test]
    fn swapped_bounds_and_heading() {
        let grid = PrimeGrid::new(20, 10, GridOptions::default());
        assert_eq!(grid.bounds(), (10, 20));
        assert_eq!(grid.primes(), &[11, 13, 17, 19]);
        assert_eq!(grid.heading(), "Prime numbers between 10 and 20:");
    }

    #[test]
    fn zero_columns_means_one_per_row() {
        let opts = GridOptions {
            columns: 0,
            ..GridOptions::ascii()
        };
        assert_eq!(PrimeGrid::new(2, 4, opts).to_string(), "#\n#\n.\n");
    }

    #[test]
    fn large_range_detection() {
        let opts = GridOptions::default();
        assert!(!opts.is_large(0, 200));
        assert!(opts.is_large(0, 201));
        assert!(opts.is_large(201, 0));
    }
}
