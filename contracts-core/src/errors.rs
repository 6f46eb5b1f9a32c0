//! Errors stemming from verifier operations

use core::fmt::{self, Display};

use contracts_common::{backends::G1ArithmeticError, custom_serde::SerdeError};

/// Errors that abort a verification call.
///
/// A well-formed but incorrect witness is not an error; the verifiers
/// return `Ok(false)` in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierError {
    /// A denominator, or a value that must be inverted, is zero modulo the field order
    DivisionByZero,
    /// The matrix dimension is zero or exceeds `MAX_DIM`
    InvalidDimension,
    /// The verification inputs are shorter than the dimension requires
    InvalidInputs,
    /// A commitment is neither a point on the curve nor the encoding of the point at infinity
    InvalidPoint,
    /// An error that occurred in the operations of the G1 arithmetic backend
    ArithmeticBackend,
    /// The calldata could not be ABI-decoded
    Calldata,
    /// The calldata selector does not match any entrypoint
    UnknownSelector,
}

impl Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierError::DivisionByZero => write!(f, "division by zero"),
            VerifierError::InvalidDimension => write!(f, "invalid dimension"),
            VerifierError::InvalidInputs => write!(f, "invalid inputs"),
            VerifierError::InvalidPoint => write!(f, "invalid point"),
            VerifierError::ArithmeticBackend => write!(f, "arithmetic backend error"),
            VerifierError::Calldata => write!(f, "invalid calldata"),
            VerifierError::UnknownSelector => write!(f, "unknown selector"),
        }
    }
}

impl From<G1ArithmeticError> for VerifierError {
    fn from(_value: G1ArithmeticError) -> Self {
        VerifierError::ArithmeticBackend
    }
}

impl From<SerdeError> for VerifierError {
    fn from(value: SerdeError) -> Self {
        match value {
            SerdeError::InvalidPoint | SerdeError::ScalarConversion => VerifierError::InvalidPoint,
            SerdeError::InvalidLength => VerifierError::InvalidInputs,
        }
    }
}
