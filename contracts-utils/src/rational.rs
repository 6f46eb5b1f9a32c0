//! Witness generation for the rational adder.
//!
//! The arithmetic here is done over `BigUint`s rather than field elements, so that
//! it serves as an independent reference for the verifier.

use ark_ff::{PrimeField, Zero};
use ark_std::UniformRand;
use contracts_common::types::{Rational, ScalarField};
use eyre::{eyre, Result};
use num_bigint::BigUint;
use rand::Rng;

/// A full witness for a `rationalAdd` call: two summands and the claimed
/// numerator & denominator of their sum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RationalAddWitness {
    /// The first summand
    pub a: Rational,
    /// The second summand
    pub b: Rational,
    /// The claimed numerator of the sum
    pub num: ScalarField,
    /// The claimed denominator of the sum
    pub den: ScalarField,
}

/// The scalar field modulus as a `BigUint`
fn scalar_modulus() -> BigUint {
    ScalarField::MODULUS.into()
}

/// Modular inverse in the scalar field via Fermat's little theorem, i.e. `u^(p - 2) mod p`.
///
/// Only meaningful for `u != 0 mod p`.
pub fn inv_mod_p(u: &BigUint) -> BigUint {
    let p = scalar_modulus();
    u.modpow(&(&p - 2_u32), &p)
}

/// Computes `a + b` over the scalar field, returning `None` if either denominator is zero
pub fn rational_sum(a: Rational, b: Rational) -> Option<ScalarField> {
    if a.denominator.is_zero() || b.denominator.is_zero() {
        return None;
    }

    let p = scalar_modulus();
    let (x1, y1): (BigUint, BigUint) = (a.numerator.into(), a.denominator.into());
    let (x2, y2): (BigUint, BigUint) = (b.numerator.into(), b.denominator.into());

    let sum = (x1 * inv_mod_p(&y1) + x2 * inv_mod_p(&y2)) % p;
    Some(ScalarField::from(sum))
}

/// Generates the witness that makes `num / den` equal to `a + b` for the given
/// denominator, i.e. `num = (a + b) * den`
pub fn gen_rational_witness(
    a: Rational,
    b: Rational,
    den: ScalarField,
) -> Result<RationalAddWitness> {
    if den.is_zero() {
        return Err(eyre!("claimed denominator is zero"));
    }
    let sum = rational_sum(a, b).ok_or_else(|| eyre!("summand denominator is zero"))?;

    let p = scalar_modulus();
    let sum: BigUint = sum.into();
    let den_int: BigUint = den.into();
    let num = ScalarField::from((sum * den_int) % p);

    Ok(RationalAddWitness { a, b, num, den })
}

/// The worked example `3/4 + 5/7` claimed over a denominator of `11`
pub fn example_witness() -> Result<RationalAddWitness> {
    gen_rational_witness(
        Rational::new(3_u64.into(), 4_u64.into()),
        Rational::new(5_u64.into(), 7_u64.into()),
        11_u64.into(),
    )
}

/// Samples a uniformly random nonzero scalar
pub fn random_nonzero_scalar<R: Rng>(rng: &mut R) -> ScalarField {
    loop {
        let scalar = ScalarField::rand(rng);
        if !scalar.is_zero() {
            return scalar;
        }
    }
}

/// Generates a random valid witness, with uniformly random numerators and
/// nonzero denominators
pub fn random_rational_witness<R: Rng>(rng: &mut R) -> Result<RationalAddWitness> {
    let a = Rational::new(ScalarField::rand(rng), random_nonzero_scalar(rng));
    let b = Rational::new(ScalarField::rand(rng), random_nonzero_scalar(rng));
    gen_rational_witness(a, b, random_nonzero_scalar(rng))
}
