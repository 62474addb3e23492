//! Multiplicative inverse by recursion on the remainder of the modulus.
//!
//! For `1 < a < p` write `p = q·a + rate`. If `k` is the inverse of `a` modulo `rate`, then
//! `k·a - 1` is a multiple of `rate`, and the number of times that multiple "passes" through
//! `rate` gives the multiplier that makes `p·passes + 1` a multiple of `a`:
//!
//! ```text
//! passes = (k·a - 1) / rate
//! a⁻¹    = (p·passes + 1) / a
//! ```
//!
//! Finding `k` is the same problem over the smaller modulus `rate`, so the recursion follows the
//! Euclidean remainder sequence and has `O(log a)` depth. When `a ≡ 1 (mod rate)` the inverse is
//! simply `k = 1` and the recursion stops.

use super::reduce;
use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Compute `a⁻¹ (mod p)`.
///
/// # Errors
///
/// Returns [`Error::InvalidInverseInput`] if `a ≡ 0 (mod p)` or `a` shares a factor with `p`.
/// Either condition makes one of the divisions above inexact.
pub fn reciprocal(p: &BigInt, a: &BigInt) -> Result<BigInt> {
    let a = reduce(p, a);
    solve(p.magnitude(), a.magnitude()).map(BigInt::from)
}

/// Inverse of `a` modulo `p`, for `a < p`.
fn solve(p: &BigUint, a: &BigUint) -> Result<BigUint> {
    if a.is_one() {
        return Ok(BigUint::one());
    }

    if a.is_zero() {
        return Err(Error::InvalidInverseInput);
    }

    let rate = p % a;

    // `a` divides `p`
    if rate.is_zero() {
        return Err(Error::InvalidInverseInput);
    }

    let error = (a - 1u32) % &rate;
    let k = if error.is_zero() {
        BigUint::one()
    } else {
        solve(&rate, &(a % &rate))?
    };

    let passes = exact_div(&(k * a - 1u32), &rate)?;
    exact_div(&(p * passes + 1u32), a)
}

fn exact_div(n: &BigUint, d: &BigUint) -> Result<BigUint> {
    if (n % d).is_zero() {
        Ok(n / d)
    } else {
        Err(Error::InvalidInverseInput)
    }
}
