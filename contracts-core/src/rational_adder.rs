//! Verification of rational addition over the BN254 scalar field.
//!
//! A claim `num / den == x1 / y1 + x2 / y2` is checked without any division
//! on the claimed side: the verifier computes `s = x1 * y1^-1 + x2 * y2^-1`
//! and accepts iff `s * den == num`.

use alloy_primitives::U256;
use ark_ff::{BigInt, BigInteger, Field, PrimeField, Zero};
use contracts_common::{
    custom_serde::u256_to_scalar,
    types::{Rational, ScalarField},
};

use crate::errors::VerifierError;

/// The rational adder verifier, which is stateless
pub struct RationalAdder;

impl RationalAdder {
    /// Verify that `num / den` is the sum of the rationals `a` and `b`.
    ///
    /// Returns `Ok(false)` for a well-formed but incorrect claim, and
    /// [`VerifierError::DivisionByZero`] if any denominator is zero.
    pub fn verify(
        a: Rational,
        b: Rational,
        num: ScalarField,
        den: ScalarField,
    ) -> Result<bool, VerifierError> {
        if den.is_zero() {
            return Err(VerifierError::DivisionByZero);
        }

        let sum = a.numerator * fermat_inverse(a.denominator)?
            + b.numerator * fermat_inverse(b.denominator)?;

        Ok(sum * den == num)
    }

    /// Verify a rational addition claim given as raw `uint256` words, i.e.
    /// `(numerator, denominator)` pairs for the summands and the claimed
    /// numerator & denominator of the result.
    ///
    /// Words are reduced modulo the scalar field order, so a denominator that is
    /// a multiple of the order is a zero denominator.
    pub fn verify_calldata(
        a: (U256, U256),
        b: (U256, U256),
        num: U256,
        den: U256,
    ) -> Result<bool, VerifierError> {
        Self::verify(
            rational_from_words(a),
            rational_from_words(b),
            u256_to_scalar(num),
            u256_to_scalar(den),
        )
    }
}

/// Computes the inverse of a scalar via Fermat's little theorem, i.e. `value^(r - 2)`
pub fn fermat_inverse(value: ScalarField) -> Result<ScalarField, VerifierError> {
    if value.is_zero() {
        return Err(VerifierError::DivisionByZero);
    }

    let mut exponent = ScalarField::MODULUS;
    let borrow = exponent.sub_with_borrow(&BigInt::from(2_u64));
    debug_assert!(!borrow);

    Ok(value.pow(exponent))
}

/// Converts a `(numerator, denominator)` pair of words into a [`Rational`]
fn rational_from_words((numerator, denominator): (U256, U256)) -> Rational {
    Rational::new(u256_to_scalar(numerator), u256_to_scalar(denominator))
}
