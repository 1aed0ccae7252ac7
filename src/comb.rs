use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CombError {
    #[error("invalid argument: cannot choose from a set of size {n}")]
    InvalidArgument { n: i64 },
    #[error("{n}-comb-{k} does not fit in 64 bits")]
    Overflow { n: i64, k: i64 },
}

/// Computes C(n, k) exactly.
///
/// Out-of-range k (negative or above n) yields 0 by the usual convention;
/// only a negative n is an error. Values are computed in u64 and promoted
/// to `BigUint` once they stop fitting, so the result is always exact.
pub fn comb(n: i64, k: i64) -> Result<BigUint, CombError> {
    if n < 0 {
        return Err(CombError::InvalidArgument { n });
    }
    if k < 0 || k > n {
        return Ok(BigUint::zero());
    }

    let reduced = (k as u64).min((n - k) as u64);
    match comb_fixed(n as u64, reduced) {
        Some(value) => Ok(BigUint::from(value)),
        None => Ok(comb_big(n as u64, reduced)),
    }
}

/// Fixed-width variant of [`comb`]: fails with [`CombError::Overflow`]
/// instead of promoting when the value exceeds `u64::MAX`.
pub fn comb_u64(n: i64, k: i64) -> Result<u64, CombError> {
    if n < 0 {
        return Err(CombError::InvalidArgument { n });
    }
    if k < 0 || k > n {
        return Ok(0);
    }

    let reduced = (k as u64).min((n - k) as u64);
    comb_fixed(n as u64, reduced).ok_or(CombError::Overflow { n, k })
}

// The running product after step i equals C(n-k+i, i), an exact integer no
// larger than C(n, k). Each step cancels the denominator up front, so the
// sole checked multiply overflows iff the true value exceeds u64::MAX.
fn comb_fixed(n: u64, k: u64) -> Option<u64> {
    let mut acc: u64 = 1;
    for i in 1..=k {
        let mut num = n - k + i;
        let mut den = i;
        let g = gcd(num, den);
        num /= g;
        den /= g;
        // num and den are now coprime, so den divides the accumulator.
        acc = (acc / den).checked_mul(num)?;
    }
    Some(acc)
}

fn comb_big(n: u64, k: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 1..=k {
        acc *= n - k + i;
        acc /= i;
    }
    acc
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
