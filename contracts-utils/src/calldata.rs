//! Builders for the ABI-encoded calls to the verification contracts

use alloy_primitives::U256;
use contracts_common::{
    constants::{MAX_DIM, MAX_MATRIX_ENTRIES},
    custom_serde::{g1_to_coords, scalar_to_u256},
    solidity::{
        IVerifiers::{matmulCall, rationalAddCall},
        G1Point, RationalWitness,
    },
    types::{G1Affine, Rational, ScalarField},
};
use eyre::{eyre, Result};

use crate::{matmul::MatMulInstance, rational::RationalAddWitness};

/// Builds the `rationalAdd` call for the given witness
pub fn rational_add_calldata(witness: &RationalAddWitness) -> rationalAddCall {
    rationalAddCall {
        a: rational_to_witness(witness.a),
        b: rational_to_witness(witness.b),
        num: scalar_to_u256(witness.num),
        den: scalar_to_u256(witness.den),
    }
}

/// Builds the `matmul` call for a claim of dimension `n`, zero-padding the
/// matrix, commitments and outputs up to their fixed ABI lengths
pub fn matmul_calldata(
    matrix: &[ScalarField],
    n: usize,
    commitments: &[G1Affine],
    outputs: &[ScalarField],
) -> Result<matmulCall> {
    let matrix: Vec<U256> = matrix.iter().copied().map(scalar_to_u256).collect();
    let points: Vec<(U256, U256)> = commitments.iter().map(g1_to_coords).collect();
    let outputs: Vec<U256> = outputs.iter().copied().map(scalar_to_u256).collect();

    raw_matmul_calldata(&matrix, U256::from(n), &points, &outputs)
}

/// Builds the `matmul` call for a generated instance
pub fn instance_calldata(instance: &MatMulInstance) -> Result<matmulCall> {
    matmul_calldata(
        &instance.matrix,
        instance.n,
        &instance.commitments,
        &instance.outputs,
    )
}

/// Builds the `matmul` call from raw words, without validating the dimension
/// against the other arguments. Used to exercise out-of-range claims.
pub fn raw_matmul_calldata(
    matrix: &[U256],
    n: U256,
    points: &[(U256, U256)],
    outputs: &[U256],
) -> Result<matmulCall> {
    Ok(matmulCall {
        matrix: pad_matrix(matrix)?,
        n,
        s: pad_points(points)?,
        o: pad_scalars(outputs)?,
    })
}

/// Zero-pads a flat matrix to the `MAX_DIM * MAX_DIM` entries of the ABI
pub fn pad_matrix(matrix: &[U256]) -> Result<[U256; MAX_MATRIX_ENTRIES]> {
    pad(matrix, U256::ZERO)
}

/// Pads the given points with the point at infinity up to `MAX_DIM` entries
pub fn pad_points(points: &[(U256, U256)]) -> Result<[G1Point; MAX_DIM]> {
    let points: [(U256, U256); MAX_DIM] = pad(points, (U256::ZERO, U256::ZERO))?;
    Ok(core::array::from_fn(|i| {
        let (x, y) = points[i];
        G1Point { x, y }
    }))
}

/// Zero-pads a vector of scalars up to `MAX_DIM` entries
pub fn pad_scalars(scalars: &[U256]) -> Result<[U256; MAX_DIM]> {
    pad(scalars, U256::ZERO)
}

/// Copies `values` into a fixed-length array, filling the remainder with `fill`
fn pad<T: Copy, const N: usize>(values: &[T], fill: T) -> Result<[T; N]> {
    if values.len() > N {
        return Err(eyre!("{} values exceed the maximum of {N}", values.len()));
    }

    let mut padded = [fill; N];
    padded[..values.len()].copy_from_slice(values);
    Ok(padded)
}

/// Converts a rational to its ABI representation
fn rational_to_witness(rational: Rational) -> RationalWitness {
    RationalWitness {
        numerator: scalar_to_u256(rational.numerator),
        denominator: scalar_to_u256(rational.denominator),
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;
    use ark_ec::AffineRepr;
    use contracts_common::{
        constants::{MAX_DIM, MAX_MATRIX_ENTRIES},
        custom_serde::g1_to_coords,
        solidity::IVerifiers::{matmulCall, rationalAddCall},
        types::G1Affine,
    };
    use rand::thread_rng;

    use crate::{matmul::random_matmul_instance, rational::example_witness};

    use super::{instance_calldata, pad_matrix, pad_points, rational_add_calldata};

    #[test]
    fn test_rational_add_calldata() {
        let witness = example_witness().unwrap();
        let call = rational_add_calldata(&witness);

        assert_eq!(call.a.numerator, U256::from(3_u64));
        assert_eq!(call.a.denominator, U256::from(4_u64));
        assert_eq!(call.b.numerator, U256::from(5_u64));
        assert_eq!(call.b.denominator, U256::from(7_u64));
        assert_eq!(call.den, U256::from(11_u64));

        let decoded = rationalAddCall::abi_decode(&call.abi_encode(), true).unwrap();
        assert_eq!(decoded.num, call.num);
    }

    #[test]
    fn test_instance_calldata_padding() {
        let mut rng = thread_rng();
        let instance = random_matmul_instance(2, &mut rng).unwrap();
        let call = instance_calldata(&instance).unwrap();

        assert_eq!(call.n, U256::from(2_u64));
        assert!(call.matrix[4..].iter().all(|word| word.is_zero()));
        assert!(call.o[2..].iter().all(|word| word.is_zero()));
        assert!(call.s[2..].iter().all(|p| p.x.is_zero() && p.y.is_zero()));
        assert_eq!((call.s[1].x, call.s[1].y), g1_to_coords(&instance.commitments[1]));

        // Fixed-size arrays encode inline: selector, 36 + 1 + 12 + 6 words
        let encoded = call.abi_encode();
        assert_eq!(encoded.len(), 4 + 32 * (MAX_MATRIX_ENTRIES + 1 + 2 * MAX_DIM + MAX_DIM));
        assert_eq!(matmulCall::abi_decode(&encoded, true).unwrap().n, call.n);
    }

    #[test]
    fn test_padding_overflow() {
        assert!(pad_matrix(&[U256::ZERO; MAX_MATRIX_ENTRIES + 1]).is_err());

        let generator = g1_to_coords(&G1Affine::generator());
        assert!(pad_points(&[generator; MAX_DIM]).is_ok());
        assert!(pad_points(&[generator; MAX_DIM + 1]).is_err());
    }

    #[test]
    fn test_pad_points_fills_identity() {
        let generator = g1_to_coords(&G1Affine::generator());
        let padded = pad_points(&[generator]).unwrap();

        assert_eq!((padded[0].x, padded[0].y), generator);
        assert!(padded[1..].iter().all(|p| p.x.is_zero() && p.y.is_zero()));
    }
}
