//! Utilities for parsing script arguments & running calls

use std::str::FromStr;

use alloy_primitives::U256;
use alloy_sol_types::{sol_data::Bool, SolType};
use contracts_common::{
    custom_serde::{g1_to_coords, scalar_to_u256, u256_to_scalar},
    types::{G1Affine, ScalarField},
};
use contracts_core::dispatch::dispatch;
use contracts_utils::backends::ArkG1ArithmeticBackend;
use tracing::{debug, info};

use crate::{constants::HEX_PREFIX, errors::ScriptError, types::Outcome};

/// Parses a decimal or `0x`-prefixed hex integer into a scalar, reducing it
/// modulo the field order
pub fn parse_scalar(value: &str) -> Result<ScalarField, ScriptError> {
    let word = U256::from_str(value.trim())
        .map_err(|e| ScriptError::ArgParsing(format!("{value}: {e}")))?;
    Ok(u256_to_scalar(word))
}

/// Parses each of the given integers into a scalar
pub fn parse_scalars(values: &[String]) -> Result<Vec<ScalarField>, ScriptError> {
    values.iter().map(|v| parse_scalar(v)).collect()
}

/// Formats a scalar as a decimal string
pub fn fmt_scalar(scalar: ScalarField) -> String {
    scalar_to_u256(scalar).to_string()
}

/// Formats each of the given scalars as a decimal string
pub fn fmt_scalars(scalars: &[ScalarField]) -> Vec<String> {
    scalars.iter().copied().map(fmt_scalar).collect()
}

/// Formats a point as its decimal `[x, y]` coordinates, with `(0, 0)` for the identity
pub fn fmt_point(point: &G1Affine) -> [String; 2] {
    let (x, y) = g1_to_coords(point);
    [x.to_string(), y.to_string()]
}

/// Hex-encodes calldata with a `0x` prefix
pub fn encode_calldata(calldata: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(calldata))
}

/// Decodes hex calldata, with or without a `0x` prefix
pub fn decode_calldata(calldata: &str) -> Result<Vec<u8>, ScriptError> {
    let calldata = calldata.trim();
    hex::decode(calldata.strip_prefix(HEX_PREFIX).unwrap_or(calldata))
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Runs the calldata through the native dispatcher, as a deployed contract would
pub fn execute(calldata: &[u8]) -> Result<Outcome, ScriptError> {
    debug!("dispatching {} bytes of calldata", calldata.len());

    let outcome = match dispatch::<ArkG1ArithmeticBackend>(calldata) {
        Ok(ret) => {
            let verdict = Bool::abi_decode(&ret, true /* validate */)
                .map_err(|e| ScriptError::ReturnDecoding(e.to_string()))?;
            Outcome::Verdict(verdict)
        }
        Err(e) => Outcome::Revert(e.to_string()),
    };

    info!("call outcome: {outcome}");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use ark_ff::PrimeField;
    use contracts_common::types::ScalarField;

    use super::{decode_calldata, encode_calldata, fmt_scalar, parse_scalar};

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("11").unwrap(), ScalarField::from(11_u64));
        assert_eq!(parse_scalar("0x0b").unwrap(), ScalarField::from(11_u64));
        assert!(parse_scalar("eleven").is_err());

        // Values are reduced modulo the field order
        let modulus = ScalarField::MODULUS.to_string();
        assert_eq!(parse_scalar(&modulus).unwrap(), ScalarField::from(0_u64));
        assert_eq!(fmt_scalar(parse_scalar("12345").unwrap()), "12345");
    }

    #[test]
    fn test_calldata_hex() {
        let calldata = [0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_calldata(&calldata);
        assert_eq!(encoded, "0xdeadbeef");
        assert_eq!(decode_calldata(&encoded).unwrap(), calldata);
        assert_eq!(decode_calldata("deadbeef").unwrap(), calldata);
        assert!(decode_calldata("0xzz").is_err());
    }
}
