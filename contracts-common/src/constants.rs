//! Constants that parameterize the verification contracts

/// The maximum dimension of a matrix accepted by the EC matrix-multiplication verifier.
///
/// Calldata carries fixed-size arrays of this length (and its square), so this
/// must match the array sizes in the Solidity interface.
pub const MAX_DIM: usize = 6;

/// The number of entries in the flattened, zero-padded matrix passed to the
/// EC matrix-multiplication verifier
pub const MAX_MATRIX_ENTRIES: usize = MAX_DIM * MAX_DIM;

/// The number of bytes to represent field elements of the base or scalar fields for the G1 curve group
pub const NUM_BYTES_FELT: usize = 32;

/// The number of bytes in an EIP-196 encoding of a G1 point, i.e. its two affine coordinates
pub const NUM_BYTES_G1_POINT: usize = NUM_BYTES_FELT * 2;

/// The number of u64s it takes to represent a field element
pub const NUM_U64S_FELT: usize = 4;

/// The number of bytes it takes to represent a u64
pub const NUM_BYTES_U64: usize = 8;

/// The number of bytes in a Solidity function selector
pub const NUM_BYTES_SELECTOR: usize = 4;
