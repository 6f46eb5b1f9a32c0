//! Custom de/serialization logic used to:
//! 1. de/serialize objects to/from byte arrays for use in EVM precompiles
//! 2. convert ABI-level `uint256` words into field elements and curve points

use alloc::vec::Vec;
use alloy_primitives::U256;
use ark_ec::AffineRepr;
use ark_ff::{BigInt, BigInteger, MontConfig, PrimeField, Zero};

use crate::{
    constants::{NUM_BYTES_FELT, NUM_BYTES_G1_POINT, NUM_BYTES_U64, NUM_U64S_FELT},
    types::{G1Affine, G1BaseField, MontFp256, ScalarField},
};

/// An error that occurs during de/serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerdeError {
    /// A sequence of deserialized elements is not the expected length
    InvalidLength,
    /// An error in the conversion of a value into a BN254 field element,
    /// i.e. the value is not a canonical element of the field
    ScalarConversion,
    /// A pair of coordinates that is neither a point on the curve
    /// nor the `(0, 0)` encoding of the point at infinity
    InvalidPoint,
}

// -------------------------------
// | BYTE SERDE TRAIT DEFINITION |
// -------------------------------

/// A trait for serializing types into byte arrays
pub trait BytesSerializable {
    /// Serializes a type into a vector of bytes,
    /// for use in precompiles
    fn serialize_to_bytes(&self) -> Vec<u8>;
}

/// A trait for deserializing types from byte arrays
pub trait BytesDeserializable {
    /// The number of bytes expected to be deserialized
    const SER_LEN: usize;

    /// Deserializes a type from a slice of bytes,
    /// returned from a precompile
    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError>
    where
        Self: Sized;
}

// -------------------------
// | TRAIT IMPLEMENTATIONS |
// -------------------------

impl<P: MontConfig<NUM_U64S_FELT>> BytesSerializable for MontFp256<P> {
    /// Serializes a field element into a big-endian byte array
    fn serialize_to_bytes(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_be()
    }
}

impl<P: MontConfig<NUM_U64S_FELT>> BytesDeserializable for MontFp256<P> {
    const SER_LEN: usize = NUM_BYTES_FELT;

    /// Deserializes a big-endian byte array into a field element,
    /// rejecting values that are not reduced modulo the field order
    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        // Field elements are serialized as big-endian, so we need to reverse here
        // for `bigint_from_le_bytes`
        let mut bytes = bytes.to_vec();
        bytes.reverse();
        let bigint = bigint_from_le_bytes(&bytes)?;
        Self::from_bigint(bigint).ok_or(SerdeError::ScalarConversion)
    }
}

impl BytesSerializable for G1Affine {
    /// Serializes a G1 point into a big-endian byte array of its coordinates.
    ///
    /// This matches the format expected by the EVM `ecAdd` and `ecMul`
    /// precompiles as specified here:
    /// https://eips.ethereum.org/EIPS/eip-196#encoding
    ///
    /// The point at infinity is encoded as `(0, 0)`.
    fn serialize_to_bytes(&self) -> Vec<u8> {
        let zero = G1BaseField::zero();
        let (x, y) = self.xy().unwrap_or((&zero, &zero));
        let mut bytes = Vec::with_capacity(NUM_BYTES_G1_POINT);
        bytes.extend(x.serialize_to_bytes());
        bytes.extend(y.serialize_to_bytes());
        bytes
    }
}

impl BytesDeserializable for G1Affine {
    const SER_LEN: usize = NUM_BYTES_G1_POINT;

    /// Deserializes a G1 point from a byte array.
    ///
    /// This matches the format accepted and returned by the EVM `ecAdd` and `ecMul`
    /// precompiles, as specified here:
    /// https://eips.ethereum.org/EIPS/eip-196#encoding
    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        let mut cursor = 0;
        let x = deserialize_cursor(bytes, &mut cursor)?;
        let y = deserialize_cursor(bytes, &mut cursor)?;

        g1_from_base_field(x, y)
    }
}

// --------------------
// | U256 CONVERSIONS |
// --------------------

/// Converts a [`U256`] into a [`ScalarField`] element, reducing it modulo the
/// scalar field order.
///
/// This is the interpretation the `ecMul` precompile gives its scalar input,
/// so every 256-bit word maps to exactly one scalar.
pub fn u256_to_scalar(value: U256) -> ScalarField {
    ScalarField::from_le_bytes_mod_order(&value.to_le_bytes::<NUM_BYTES_FELT>())
}

/// Converts a [`ScalarField`] element into its canonical [`U256`] representation
pub fn scalar_to_u256(scalar: ScalarField) -> U256 {
    U256::from_limbs(scalar.into_bigint().0)
}

/// Converts a [`U256`] into a [`G1BaseField`] element.
///
/// Unlike scalars, coordinates are not reduced: a value at or above the base
/// field modulus is rejected, matching the input validation of the EC precompiles.
pub fn u256_to_base_field(value: U256) -> Result<G1BaseField, SerdeError> {
    G1BaseField::from_bigint(BigInt(value.into_limbs())).ok_or(SerdeError::ScalarConversion)
}

/// Converts a [`G1BaseField`] element into its canonical [`U256`] representation
pub fn base_field_to_u256(felt: G1BaseField) -> U256 {
    U256::from_limbs(felt.into_bigint().0)
}

/// Converts a pair of affine coordinates, as passed in calldata, into a [`G1Affine`] point.
///
/// `(0, 0)` is interpreted as the point at infinity; any other pair must be a
/// canonical point on the curve.
pub fn g1_from_coords(x: U256, y: U256) -> Result<G1Affine, SerdeError> {
    g1_from_base_field(u256_to_base_field(x)?, u256_to_base_field(y)?)
}

/// Converts a [`G1Affine`] point into its affine coordinates as [`U256`]s,
/// encoding the point at infinity as `(0, 0)`
pub fn g1_to_coords(point: &G1Affine) -> (U256, U256) {
    match point.xy() {
        Some((x, y)) => (base_field_to_u256(*x), base_field_to_u256(*y)),
        None => (U256::ZERO, U256::ZERO),
    }
}

// -----------
// | HELPERS |
// -----------

/// Builds a [`G1Affine`] point from base field coordinates, validating that it lies
/// on the curve. The BN254 G1 group has cofactor 1, so no subgroup check is needed.
fn g1_from_base_field(x: G1BaseField, y: G1BaseField) -> Result<G1Affine, SerdeError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }

    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(SerdeError::InvalidPoint);
    }

    Ok(point)
}

/// Deserializes a type from a slice of bytes starting at the cursor position,
/// and increments the cursor by the number of bytes deserialized.
fn deserialize_cursor<D: BytesDeserializable>(
    bytes: &[u8],
    cursor: &mut usize,
) -> Result<D, SerdeError> {
    let end = *cursor + D::SER_LEN;
    let elem_bytes = bytes.get(*cursor..end).ok_or(SerdeError::InvalidLength)?;
    let elem = D::deserialize_from_bytes(elem_bytes)?;
    *cursor = end;
    Ok(elem)
}

/// Converts a little-endian byte array into a [`BigInt`]
pub fn bigint_from_le_bytes(bytes: &[u8]) -> Result<BigInt<NUM_U64S_FELT>, SerdeError> {
    if bytes.len() > NUM_BYTES_FELT {
        return Err(SerdeError::InvalidLength);
    }

    // This will right-pad the bytes with zero-bytes if the length is less than NUM_BYTES_FELT
    let mut bytes_to_convert = [0_u8; NUM_BYTES_FELT];
    bytes_to_convert[..bytes.len()].copy_from_slice(bytes);

    let mut u64s = [0u64; NUM_U64S_FELT];
    for (limb, chunk) in u64s
        .iter_mut()
        .zip(bytes_to_convert.chunks_exact(NUM_BYTES_U64))
    {
        let mut limb_bytes = [0_u8; NUM_BYTES_U64];
        limb_bytes.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(limb_bytes);
    }
    Ok(BigInt::<NUM_U64S_FELT>(u64s))
}
