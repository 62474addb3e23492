//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input to [`reciprocal`](crate::arithmetic::reciprocal) is zero or shares a factor with
    /// the modulus, so no multiplicative inverse exists.
    InvalidInverseInput,

    /// Exponent passed to [`power`](crate::arithmetic::power) is negative.
    InvalidExponent,

    /// Modulus is smaller than 2.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInverseInput => write!(f, "field error: invalid inverse input"),
            Error::InvalidExponent => write!(f, "field error: invalid exponent"),
            Error::InvalidModulus => write!(f, "field error: invalid modulus"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
