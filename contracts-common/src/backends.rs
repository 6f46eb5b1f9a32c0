//! "Backends" representing functionality that is either delegated to
//! EVM precompiles, or to native Rust code in tests and scripts.
//!
//! This abstraction exists primarly to let the same verification logic run
//! on-chain and natively.

use crate::types::{G1Affine, ScalarField};

/// An error that occurs when performing elliptic curve arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G1ArithmeticError;

/// Encapsulates the implementations of elliptic curve arithmetic done on the G1 group.
///
/// The type that implements this trait should be a unit struct that either calls out to precompiles
/// for EC arithmetic in a smart contract context, or calls out to Arkworks code in a native context.
pub trait G1ArithmeticBackend {
    /// Add two points in G1
    fn ec_add(a: G1Affine, b: G1Affine) -> Result<G1Affine, G1ArithmeticError>;
    /// Multiply a G1 point by a scalar in its scalar field
    fn ec_scalar_mul(a: ScalarField, b: G1Affine) -> Result<G1Affine, G1ArithmeticError>;

    /// A helper for computing multi-scalar multiplications over G1
    fn msm(scalars: &[ScalarField], points: &[G1Affine]) -> Result<G1Affine, G1ArithmeticError> {
        if scalars.len() != points.len() {
            return Err(G1ArithmeticError);
        }

        scalars
            .iter()
            .zip(points.iter())
            .try_fold(G1Affine::identity(), |acc, (scalar, point)| {
                let scaled_point = Self::ec_scalar_mul(*scalar, *point)?;
                Self::ec_add(acc, scaled_point)
            })
    }
}
