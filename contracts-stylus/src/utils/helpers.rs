//! Miscellaneous helper functions for the contracts.

use alloc::vec::Vec;
use contracts_core::errors::VerifierError;
use stylus_sdk::alloy_primitives::U256 as AbiU256;

use super::constants::{
    CALLDATA_DESER_ERROR_MESSAGE, DIVISION_BY_ZERO_ERROR_MESSAGE, INVALID_DIMENSION_ERROR_MESSAGE,
    INVALID_INPUTS_ERROR_MESSAGE, INVALID_POINT_ERROR_MESSAGE, PRECOMPILE_ERROR_MESSAGE,
};

/// Maps a [`VerifierError`] to the `Vec<u8>` form of the matching revert message,
/// which is the expected error type of external contract methods.
pub fn map_verifier_error(e: VerifierError) -> Vec<u8> {
    let msg = match e {
        VerifierError::DivisionByZero => DIVISION_BY_ZERO_ERROR_MESSAGE,
        VerifierError::InvalidDimension => INVALID_DIMENSION_ERROR_MESSAGE,
        VerifierError::InvalidInputs => INVALID_INPUTS_ERROR_MESSAGE,
        VerifierError::InvalidPoint => INVALID_POINT_ERROR_MESSAGE,
        VerifierError::ArithmeticBackend => PRECOMPILE_ERROR_MESSAGE,
        VerifierError::Calldata | VerifierError::UnknownSelector => CALLDATA_DESER_ERROR_MESSAGE,
    };
    msg.to_vec()
}

/// Converts a word decoded by the Stylus ABI into the `U256` type the
/// verifiers are written against
pub fn word_from_abi(word: AbiU256) -> alloy_primitives::U256 {
    alloy_primitives::U256::from_limbs(*word.as_limbs())
}
