//! Native execution of ABI-encoded calls to the verification contracts.
//!
//! On-chain, the Stylus router decodes calldata and invokes the matching
//! entrypoint. This module does the same off-chain, so that scripts and tests can
//! drive the exact calldata a deployed contract would receive.

use alloc::vec::Vec;
use alloy_sol_types::{Error as SolError, SolCall, SolInterface};
use contracts_common::{
    backends::G1ArithmeticBackend,
    constants::NUM_BYTES_SELECTOR,
    solidity::IVerifiers::{matmulCall, rationalAddCall, IVerifiersCalls},
};

use crate::{ec_matmul::EcMatMulVerifier, errors::VerifierError, rational_adder::RationalAdder};

/// Decodes the given calldata, runs the selected verifier, and returns the
/// ABI-encoded boolean result.
///
/// Precondition violations surface as `Err`, the native analogue of a revert.
pub fn dispatch<G: G1ArithmeticBackend>(calldata: &[u8]) -> Result<Vec<u8>, VerifierError> {
    // Route on the selector before decoding, as argument decoding checks the length first
    let selector: [u8; NUM_BYTES_SELECTOR] = calldata
        .get(..NUM_BYTES_SELECTOR)
        .and_then(|selector| selector.try_into().ok())
        .ok_or(VerifierError::UnknownSelector)?;
    if !IVerifiersCalls::valid_selector(selector) {
        return Err(VerifierError::UnknownSelector);
    }

    let call = IVerifiersCalls::abi_decode(calldata, true /* validate */).map_err(|e| match e {
        SolError::UnknownSelector { .. } => VerifierError::UnknownSelector,
        _ => VerifierError::Calldata,
    })?;

    match call {
        IVerifiersCalls::rationalAdd(call) => {
            let verdict = rational_add(call)?;
            Ok(rationalAddCall::abi_encode_returns(&(verdict,)))
        }
        IVerifiersCalls::matmul(call) => {
            let verdict = matmul::<G>(call)?;
            Ok(matmulCall::abi_encode_returns(&(verdict,)))
        }
    }
}

/// Runs the rational adder on a decoded `rationalAdd` call
pub fn rational_add(call: rationalAddCall) -> Result<bool, VerifierError> {
    RationalAdder::verify_calldata(
        (call.a.numerator, call.a.denominator),
        (call.b.numerator, call.b.denominator),
        call.num,
        call.den,
    )
}

/// Runs the EC matrix-multiplication verifier on a decoded `matmul` call
pub fn matmul<G: G1ArithmeticBackend>(call: matmulCall) -> Result<bool, VerifierError> {
    let points = call.s.map(|point| (point.x, point.y));
    EcMatMulVerifier::<G>::verify_calldata(&call.matrix, call.n, &points, &call.o)
}
