//! Field handle binding a fixed modulus to the [`arithmetic`](crate::arithmetic) operations.

mod sqrt;

pub use self::sqrt::{PowerFn, Shanks, SqrtStrategy};

use crate::{Error, Result, arithmetic};
use num_bigint::BigInt;

/// Marker for a [`PrimeField`] constructed without a square root strategy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoSqrt;

/// Prime field whose modulus satisfies `p ≡ 3 (mod 4)`, with square roots via [`Shanks`].
pub type P3Mod4Field = PrimeField<Shanks>;

/// Finite field of prime order `p`.
///
/// Stores the modulus and forwards to the free functions in [`arithmetic`], so
/// `field.add(a, b)` is exactly `arithmetic::add(field.modulus(), a, b)`. Elements are plain
/// [`BigInt`]s. The modulus is not checked for primality.
///
/// `S` is the square root strategy chosen at construction; [`PrimeField::sqrt`] only exists
/// when `S` implements [`SqrtStrategy`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeField<S = NoSqrt> {
    modulus: BigInt,
    strategy: S,
}

impl PrimeField {
    /// Create a field of order `p` without square root support.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `p < 2`.
    pub fn new(p: impl Into<BigInt>) -> Result<Self> {
        Self::bind(p.into(), NoSqrt)
    }
}

impl PrimeField<Shanks> {
    /// Create a field of order `p ≡ 3 (mod 4)` which computes square roots with [`Shanks`].
    ///
    /// The congruence is not checked; see [`Shanks::applies_to`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `p < 2`.
    pub fn p3mod4(p: impl Into<BigInt>) -> Result<Self> {
        Self::with_sqrt(p, Shanks)
    }
}

impl<S: SqrtStrategy> PrimeField<S> {
    /// Create a field of order `p` which computes square roots with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `p < 2`.
    pub fn with_sqrt(p: impl Into<BigInt>, strategy: S) -> Result<Self> {
        Self::bind(p.into(), strategy)
    }

    /// Square root of `a` according to the field's strategy.
    ///
    /// The result is unspecified (but never an error) when `a` is a non-residue or the modulus
    /// is outside the class the strategy handles.
    pub fn sqrt(&self, a: &BigInt) -> BigInt {
        self.strategy.sqrt(arithmetic::pow_vartime, &self.modulus, a)
    }

    /// Square root of `a`, or `None` if the strategy's output does not square to `a`.
    pub fn sqrt_checked(&self, a: &BigInt) -> Option<BigInt> {
        let root = self.sqrt(a);
        (self.multiply(&root, &root) == self.reduce(a)).then_some(root)
    }
}

impl<S> PrimeField<S> {
    fn bind(modulus: BigInt, strategy: S) -> Result<Self> {
        if modulus < BigInt::from(2u8) {
            return Err(Error::InvalidModulus);
        }

        Ok(Self { modulus, strategy })
    }

    /// Order of the field.
    #[inline]
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Square root strategy bound to this field.
    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Canonical representative of `a`.
    #[inline]
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        arithmetic::reduce(&self.modulus, a)
    }

    /// Add two field elements.
    #[inline]
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        arithmetic::add(&self.modulus, a, b)
    }

    /// Subtract `b` from `a`.
    #[inline]
    pub fn subtract(&self, a: &BigInt, b: &BigInt) -> BigInt {
        arithmetic::subtract(&self.modulus, a, b)
    }

    /// Multiply two field elements.
    #[inline]
    pub fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        arithmetic::multiply(&self.modulus, a, b)
    }

    /// Additive inverse of `a`.
    #[inline]
    pub fn additive_inverse(&self, a: &BigInt) -> BigInt {
        arithmetic::additive_inverse(&self.modulus, a)
    }

    /// Multiplicative inverse of `a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInverseInput`] if `a` is zero in this field.
    #[inline]
    pub fn reciprocal(&self, a: &BigInt) -> Result<BigInt> {
        arithmetic::reciprocal(&self.modulus, a)
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInverseInput`] if `b` is zero in this field.
    #[inline]
    pub fn divide(&self, a: &BigInt, b: &BigInt) -> Result<BigInt> {
        arithmetic::divide(&self.modulus, a, b)
    }

    /// Raise `b` to the power `e`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExponent`] if `e` is negative.
    #[inline]
    pub fn power(&self, b: &BigInt, e: &BigInt) -> Result<BigInt> {
        arithmetic::power(&self.modulus, b, e)
    }

    /// Is `a` a quadratic residue?
    #[inline]
    pub fn qr(&self, a: &BigInt) -> bool {
        arithmetic::qr(&self.modulus, a)
    }
}
