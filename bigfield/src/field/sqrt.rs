//! Pluggable modular square root strategies.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

/// Modular exponentiation capability handed to a [`SqrtStrategy`]: `base^exp (mod p)`.
pub type PowerFn = fn(p: &BigInt, base: &BigInt, exp: &BigUint) -> BigInt;

/// Square root algorithm for some class of prime moduli.
///
/// Implementations are bound to a [`PrimeField`](crate::PrimeField) when it is constructed and
/// receive the field's exponentiation routine on every call.
pub trait SqrtStrategy {
    /// Compute a square root of `a` modulo `p`.
    ///
    /// The result is only meaningful when the strategy's preconditions on `p` hold and `a` is a
    /// quadratic residue. Implementations are not required to detect violations.
    fn sqrt(&self, power: PowerFn, p: &BigInt, a: &BigInt) -> BigInt;
}

/// Shanks algorithm for `p ≡ 3 (mod 4)`.
///
/// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
/// `a^((p + 1) / 4) (mod p)`.
///
/// On a non-residue, or when `p ≢ 3 (mod 4)`, the returned value is not a square root. Callers
/// that need to know should check [`Shanks::applies_to`] and [`qr`](crate::arithmetic::qr)
/// beforehand, or use [`PrimeField::sqrt_checked`](crate::PrimeField::sqrt_checked).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Shanks;

impl Shanks {
    /// Does `p ≡ 3 (mod 4)`?
    pub fn applies_to(p: &BigInt) -> bool {
        p.is_positive() && p.magnitude() % 4u32 == BigUint::from(3u32)
    }
}

impl SqrtStrategy for Shanks {
    fn sqrt(&self, power: PowerFn, p: &BigInt, a: &BigInt) -> BigInt {
        let mod_plus_1_over_4 = (p.magnitude() + 1u32) >> 2u32;
        power(p, a, &mod_plus_1_over_4)
    }
}
