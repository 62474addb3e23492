//! Stateless arithmetic modulo a prime `p`.
//!
//! Every function takes the modulus explicitly. Operands are arbitrary [`BigInt`]s and need not
//! be canonical: negative values and values `>= p` are reduced first. Results are always the
//! canonical representative in `[0, p)`.
//!
//! The modulus is assumed to be prime and is never checked. All functions panic if `p` is zero.
//!
//! None of these functions run in constant time.

mod reciprocal;

pub use self::reciprocal::reciprocal;

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Reduce `a` to its canonical representative in `[0, p)`.
#[inline]
pub fn reduce(p: &BigInt, a: &BigInt) -> BigInt {
    let r = a % p;
    if r.is_negative() { r + p } else { r }
}

/// Compute `a + b (mod p)`.
#[inline]
pub fn add(p: &BigInt, a: &BigInt, b: &BigInt) -> BigInt {
    reduce(p, &(a + b))
}

/// Compute `a - b (mod p)`, as `a` plus the additive inverse of `b`.
#[inline]
pub fn subtract(p: &BigInt, a: &BigInt, b: &BigInt) -> BigInt {
    add(p, a, &additive_inverse(p, b))
}

/// Compute `a * b (mod p)`.
#[inline]
pub fn multiply(p: &BigInt, a: &BigInt, b: &BigInt) -> BigInt {
    reduce(p, &(a * b))
}

/// Compute `-a (mod p)`, i.e. `p - a` reduced into `[0, p)`.
///
/// The additive inverse of zero is zero, not `p`.
#[inline]
pub fn additive_inverse(p: &BigInt, a: &BigInt) -> BigInt {
    reduce(p, &(p - a))
}

/// Compute `a / b (mod p)` as `a * reciprocal(p, b)`.
///
/// # Errors
///
/// Returns [`Error::InvalidInverseInput`] if `b` has no multiplicative inverse modulo `p`.
#[inline]
pub fn divide(p: &BigInt, a: &BigInt, b: &BigInt) -> Result<BigInt> {
    Ok(multiply(p, a, &reciprocal(p, b)?))
}

/// Compute `b^e (mod p)` by square-and-multiply.
///
/// # Errors
///
/// Returns [`Error::InvalidExponent`] if `e` is negative.
pub fn power(p: &BigInt, b: &BigInt, e: &BigInt) -> Result<BigInt> {
    let e = e.to_biguint().ok_or(Error::InvalidExponent)?;
    Ok(pow_vartime(p, b, &e))
}

/// Compute `base^exp (mod p)` for an unsigned exponent.
///
/// Walks the exponent from its least significant bit, squaring the base at each step and
/// multiplying it into the accumulator whenever the bit is set, so the cost is
/// `O(log exp)` multiplications.
pub fn pow_vartime(p: &BigInt, base: &BigInt, exp: &BigUint) -> BigInt {
    let mut base = reduce(p, base);
    let mut exp = exp.clone();
    let mut acc = reduce(p, &BigInt::one());

    while !exp.is_zero() {
        if exp.bit(0) {
            acc = multiply(p, &acc, &base);
        }
        base = multiply(p, &base, &base);
        exp >>= 1u32;
    }

    acc
}

/// Quadratic residue test using Euler's criterion: `a^((p - 1) / 2) ≡ 1 (mod p)`.
///
/// Expects an odd prime `p` and `0 < a < p`. Zero is reported as a non-residue.
pub fn qr(p: &BigInt, a: &BigInt) -> bool {
    let exp = (p.magnitude() - 1u32) >> 1u32;
    pow_vartime(p, a, &exp).is_one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const P: u32 = 47;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn p() -> BigInt {
        BigInt::from(P)
    }

    #[test]
    fn reduce_handles_negative_and_large_inputs() {
        assert_eq!(reduce(&p(), &int(-1)), int(46));
        assert_eq!(reduce(&p(), &int(-47)), int(0));
        assert_eq!(reduce(&p(), &int(-48)), int(46));
        assert_eq!(reduce(&p(), &int(47)), int(0));
        assert_eq!(reduce(&p(), &int(100)), int(6));
    }

    #[test]
    fn closure() {
        let p = p();
        let range = int(0)..p.clone();
        for a in 0..P {
            for b in 0..P {
                let (a, b) = (BigInt::from(a), BigInt::from(b));
                assert!(range.contains(&add(&p, &a, &b)));
                assert!(range.contains(&subtract(&p, &a, &b)));
                assert!(range.contains(&multiply(&p, &a, &b)));
            }
        }
    }

    #[test]
    fn subtract_wraps() {
        assert_eq!(subtract(&p(), &int(3), &int(5)), int(45));
        assert_eq!(subtract(&p(), &int(5), &int(3)), int(2));
        assert_eq!(subtract(&p(), &int(5), &int(0)), int(5));
    }

    #[test]
    fn additive_inverse_law() {
        let p = p();
        for a in 0..P {
            let a = BigInt::from(a);
            let neg = additive_inverse(&p, &a);
            assert!(neg < p);
            assert!(add(&p, &a, &neg).is_zero());
        }
    }

    #[test]
    fn additive_inverse_of_zero_is_zero() {
        assert!(additive_inverse(&p(), &int(0)).is_zero());
    }

    #[test]
    fn multiply_reduces_signed_operands() {
        assert_eq!(multiply(&p(), &int(-2), &int(3)), int(41));
        assert_eq!(multiply(&p(), &int(-2), &int(-3)), int(6));
    }

    #[test]
    fn power_identities() {
        let p = p();
        let zero = int(0);
        let p_minus_one = &p - 1u32;
        for a in 0..P {
            let a = BigInt::from(a);
            assert!(power(&p, &a, &zero).unwrap().is_one());
            if !a.is_zero() {
                assert!(power(&p, &a, &p_minus_one).unwrap().is_one());
            }
        }
    }

    #[test]
    fn power_matches_repeated_multiplication() {
        let p = p();
        let base = int(5);
        let mut expected = int(1);
        for e in 0..100 {
            assert_eq!(power(&p, &base, &int(e)).unwrap(), expected);
            expected = multiply(&p, &expected, &base);
        }
    }

    #[test]
    fn power_rejects_negative_exponent() {
        assert_eq!(power(&p(), &int(2), &int(-1)), Err(Error::InvalidExponent));
    }

    #[test]
    fn qr_matches_squares() {
        let p = p();
        let squares: Vec<BigInt> = (1..P)
            .map(|x| {
                let x = BigInt::from(x);
                multiply(&p, &x, &x)
            })
            .collect();

        for a in 1..P {
            let a = BigInt::from(a);
            assert_eq!(qr(&p, &a), squares.contains(&a), "a = {a}");
        }
    }

    #[test]
    fn two_is_residue_mod_47() {
        assert!(qr(&p(), &int(2)));
        assert!(!qr(&p(), &int(5)));
    }

    #[test]
    fn division_consistency() {
        let p = p();
        for a in 0..P {
            for b in 1..P - 1 {
                let (a, b) = (BigInt::from(a), BigInt::from(b));
                let product = multiply(&p, &a, &b);
                assert_eq!(divide(&p, &product, &b).unwrap(), a);
            }
        }
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(
            divide(&p(), &int(1), &int(0)),
            Err(Error::InvalidInverseInput)
        );
    }
}
