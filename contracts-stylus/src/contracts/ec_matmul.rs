//! The EC matrix-multiplication contract, which checks a claimed product of a
//! public matrix with scalars hidden behind G1 commitments

use alloc::vec::Vec;
use contracts_common::constants::{MAX_DIM, MAX_MATRIX_ENTRIES};
use contracts_core::ec_matmul::EcMatMulVerifier;
use stylus_sdk::{alloy_primitives::U256, prelude::*};

use crate::utils::{
    backends::PrecompileG1ArithmeticBackend,
    helpers::{map_verifier_error, word_from_abi},
};

/// The EC matrix-multiplication contract, which itself is stateless
#[storage]
#[entrypoint]
struct EcMatMulContract;

#[public]
impl EcMatMulContract {
    /// Returns whether `o[i] * G == sum_j matrix[i * n + j] * s[j]` for every row `i < n`.
    ///
    /// Only the leading `n x n` block of the matrix and the first `n` points & outputs
    /// are read. Reverts with "invalid dimension" unless `1 <= n <= MAX_DIM`.
    pub fn matmul(
        &self,
        matrix: [U256; MAX_MATRIX_ENTRIES],
        n: U256,
        s: [(U256, U256); MAX_DIM],
        o: [U256; MAX_DIM],
    ) -> Result<bool, Vec<u8>> {
        let matrix = matrix.map(word_from_abi);
        let points = s.map(|(x, y)| (word_from_abi(x), word_from_abi(y)));
        let outputs = o.map(word_from_abi);

        EcMatMulVerifier::<PrecompileG1ArithmeticBackend>::verify_calldata(
            &matrix,
            word_from_abi(n),
            &points,
            &outputs,
        )
        .map_err(map_verifier_error)
    }
}
