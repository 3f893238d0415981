//! Primality testing by trial division.

use num_traits::PrimInt;

/// Returns `true` iff `n` is prime.
///
/// Values below 2 (including all negatives) are not prime. For `n >= 2` every
/// candidate divisor `i` with `i * i <= n` is tried; a composite always has a
/// factor no larger than its square root. The loop bound is written as
/// `i <= n / i` so it cannot overflow near `T::max_value()`.
///
/// Works for any primitive integer type, signed or unsigned.
///
/// # Example
/// ```rust
/// use basics_toolkit::primes::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(100u32));
/// assert!(!is_prime(-7i64));
/// ```
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two {
        return false;
    }
    let mut i = two;
    while i <= n / i {
        if n % i == T::zero() {
            return false;
        }
        i = i + T::one();
    }
    true
}
