//! Elliptic curve arithmetic backed by the EVM precompiles

use contracts_common::{
    backends::{G1ArithmeticBackend, G1ArithmeticError},
    custom_serde::{BytesDeserializable, BytesSerializable},
    types::{G1Affine, ScalarField},
};
use stylus_sdk::{alloy_primitives::Address, call::RawCall};

use crate::utils::constants::{EC_ADD_ADDRESS_LAST_BYTE, EC_MUL_ADDRESS_LAST_BYTE};

/// A G1 arithmetic backend that calls out to the `ecAdd` & `ecMul` precompiles
pub struct PrecompileG1ArithmeticBackend;

impl G1ArithmeticBackend for PrecompileG1ArithmeticBackend {
    /// Calls the `ecAdd` precompile with the given points, handling de/serialization
    fn ec_add(a: G1Affine, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        // Serialize the points
        let a_data = a.serialize_to_bytes();
        let b_data = b.serialize_to_bytes();

        // Call the `ecAdd` precompile
        let res_xy_bytes = unsafe {
            RawCall::new_static().call(
                Address::with_last_byte(EC_ADD_ADDRESS_LAST_BYTE),
                &[a_data, b_data].concat(),
            )
        }
        .map_err(|_| G1ArithmeticError)?;

        // Deserialize the affine coordinates returned from the precompile
        G1Affine::deserialize_from_bytes(&res_xy_bytes).map_err(|_| G1ArithmeticError)
    }

    /// Calls the `ecMul` precompile with the given scalar and point, handling de/serialization
    fn ec_scalar_mul(a: ScalarField, b: G1Affine) -> Result<G1Affine, G1ArithmeticError> {
        // Serialize the point and scalar
        let a_data = a.serialize_to_bytes();
        let b_data = b.serialize_to_bytes();

        // Call the `ecMul` precompile
        let res_xy_bytes = unsafe {
            RawCall::new_static().call(
                Address::with_last_byte(EC_MUL_ADDRESS_LAST_BYTE),
                &[b_data, a_data].concat(),
            )
        }
        .map_err(|_| G1ArithmeticError)?;

        // Deserialize the affine coordinates returned from the precompile
        G1Affine::deserialize_from_bytes(&res_xy_bytes).map_err(|_| G1ArithmeticError)
    }
}
