//! Native implementations of the G1 arithmetic backend.
//!
//! [`ArkG1ArithmeticBackend`] computes directly with Arkworks, while
//! [`NativePrecompileBackend`] round-trips every operation through the byte-level
//! interface of the `ecAdd` / `ecMul` precompiles, exercising the same
//! encoding the on-chain backend uses.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use contracts_common::{
    backends::{G1ArithmeticBackend, G1ArithmeticError},
    constants::{NUM_BYTES_FELT, NUM_BYTES_G1_POINT},
    custom_serde::{BytesDeserializable, BytesSerializable},
    types::{G1Affine, ScalarField},
};

/// The number of bytes read by the `ecAdd` precompile
const EC_ADD_INPUT_LEN: usize = NUM_BYTES_G1_POINT * 2;

/// The number of bytes read by the `ecMul` precompile
const EC_MUL_INPUT_LEN: usize = NUM_BYTES_G1_POINT + NUM_BYTES_FELT;

/// A G1 arithmetic backend that uses Arkworks directly
pub struct ArkG1ArithmeticBackend;

impl G1ArithmeticBackend for ArkG1ArithmeticBackend {
    fn ec_add(a: G1Affine, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        Ok((a + b).into_affine())
    }

    fn ec_scalar_mul(a: ScalarField, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        let mut b_group = b.into_group();
        b_group *= a;
        Ok(b_group.into_affine())
    }
}

/// A G1 arithmetic backend that serializes its operands exactly as they would be
/// passed to the EVM precompiles, and evaluates them with [`ec_add_precompile`]
/// and [`ec_mul_precompile`]
pub struct NativePrecompileBackend;

impl G1ArithmeticBackend for NativePrecompileBackend {
    fn ec_add(a: G1Affine, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        let input = [a.serialize_to_bytes(), b.serialize_to_bytes()].concat();
        let res_xy_bytes = ec_add_precompile(&input)?;
        G1Affine::deserialize_from_bytes(&res_xy_bytes).map_err(|_| G1ArithmeticError)
    }

    fn ec_scalar_mul(a: ScalarField, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        // The `ecMul` precompile expects the point first, then the scalar
        let input = [b.serialize_to_bytes(), a.serialize_to_bytes()].concat();
        let res_xy_bytes = ec_mul_precompile(&input)?;
        G1Affine::deserialize_from_bytes(&res_xy_bytes).map_err(|_| G1ArithmeticError)
    }
}

/// Evaluates the `ecAdd` precompile on the given input, as specified in
/// https://eips.ethereum.org/EIPS/eip-196
///
/// Short inputs are right-padded with zeros and trailing bytes are ignored.
/// Coordinates that are not canonical, or points not on the curve, fail the call.
pub fn ec_add_precompile(input: &[u8]) -> Result<[u8; NUM_BYTES_G1_POINT], G1ArithmeticError> {
    let input = right_pad::<EC_ADD_INPUT_LEN>(input);
    let a = G1Affine::deserialize_from_bytes(&input[..NUM_BYTES_G1_POINT])
        .map_err(|_| G1ArithmeticError)?;
    let b = G1Affine::deserialize_from_bytes(&input[NUM_BYTES_G1_POINT..])
        .map_err(|_| G1ArithmeticError)?;

    Ok(encode_point(&(a + b).into_affine()))
}

/// Evaluates the `ecMul` precompile on the given input, as specified in
/// https://eips.ethereum.org/EIPS/eip-196
///
/// The scalar may be any 256-bit big-endian integer; it is reduced modulo the group order.
pub fn ec_mul_precompile(input: &[u8]) -> Result<[u8; NUM_BYTES_G1_POINT], G1ArithmeticError> {
    let input = right_pad::<EC_MUL_INPUT_LEN>(input);
    let point = G1Affine::deserialize_from_bytes(&input[..NUM_BYTES_G1_POINT])
        .map_err(|_| G1ArithmeticError)?;
    let scalar = ScalarField::from_be_bytes_mod_order(&input[NUM_BYTES_G1_POINT..]);

    Ok(encode_point(&(point * scalar).into_affine()))
}

/// Encodes a point into the fixed-size precompile output format
fn encode_point(point: &G1Affine) -> [u8; NUM_BYTES_G1_POINT] {
    let mut out = [0_u8; NUM_BYTES_G1_POINT];
    out.copy_from_slice(&point.serialize_to_bytes());
    out
}

/// Right-pads (or truncates) the input to exactly `N` bytes
fn right_pad<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut padded = [0_u8; N];
    let len = input.len().min(N);
    padded[..len].copy_from_slice(&input[..len]);
    padded
}
