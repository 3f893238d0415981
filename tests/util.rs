#![allow(dead_code)]

/// Primes up to `limit` by the most naive definition: no divisor in `2..n`.
pub fn naive_primes(limit: i64) -> Vec<i64> {
    (2..=limit)
        .filter(|&n| (2..n).all(|d| n % d != 0))
        .collect()
}

/// Assert a sequence is strictly ascending (sorted, no duplicates).
pub fn assert_strictly_ascending(xs: &[i64]) {
    for w in xs.windows(2) {
        assert!(w[0] < w[1], "not strictly ascending at {:?} in {:?}", w, xs);
    }
}
