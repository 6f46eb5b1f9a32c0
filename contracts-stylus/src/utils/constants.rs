//! Constants used throughout the contracts

/// The last byte of the `ecAdd` precompile address, 0x06
pub const EC_ADD_ADDRESS_LAST_BYTE: u8 = 6;

/// The last byte of the `ecMul` precompile address, 0x07
pub const EC_MUL_ADDRESS_LAST_BYTE: u8 = 7;

/// The revert message when a denominator is zero
pub const DIVISION_BY_ZERO_ERROR_MESSAGE: &[u8] = b"division by zero";

/// The revert message when the matrix dimension is out of range
pub const INVALID_DIMENSION_ERROR_MESSAGE: &[u8] = b"invalid dimension";

/// The revert message when the inputs are too short for the claimed dimension
pub const INVALID_INPUTS_ERROR_MESSAGE: &[u8] = b"invalid inputs";

/// The revert message when a commitment is not a valid G1 point
pub const INVALID_POINT_ERROR_MESSAGE: &[u8] = b"invalid point";

/// The revert message when invoking an EC precompile fails
pub const PRECOMPILE_ERROR_MESSAGE: &[u8] = b"precompile error";

/// The revert message when the calldata cannot be decoded
pub const CALLDATA_DESER_ERROR_MESSAGE: &[u8] = b"error deserializing calldata";
