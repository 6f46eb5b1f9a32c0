//! Common types used throughout the verifiers.

use ark_bn254::{g1::Config as G1Config, Fq, Fr};
use ark_ec::short_weierstrass::Affine;
use ark_ff::{Fp256, MontBackend};

use crate::constants::NUM_U64S_FELT;

/// Type alias for an element of the scalar field of the Bn254 curve
pub type ScalarField = Fr;

/// Type alias for an element of the Bn254 curve's G1 pairing group
pub type G1Affine = Affine<G1Config>;

/// Type alias for an element of the Bn254 curve's G1 pairing group's base field
pub type G1BaseField = Fq;

/// Type alias for a 256-bit prime field element in Montgomery form
pub type MontFp256<P> = Fp256<MontBackend<P, NUM_U64S_FELT>>;

/// A rational number over the scalar field, witnessed as a
/// numerator / denominator pair.
///
/// The pair represents `numerator * denominator^-1`; a zero denominator
/// is representable here but rejected by the verifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rational {
    /// The numerator of the fraction
    pub numerator: ScalarField,
    /// The denominator of the fraction
    pub denominator: ScalarField,
}

impl Rational {
    /// Construct a rational witness from its numerator and denominator
    pub fn new(numerator: ScalarField, denominator: ScalarField) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}
