//! Solidity ABI definitions of the verification contracts' entrypoints.
//!
//! These are shared by the native dispatcher, the calldata builders used in
//! tests & scripts, and anything else that needs to speak to a deployed contract.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy_sol_types::sol;

sol! {
    /// A rational number witnessed as a numerator / denominator pair
    struct RationalWitness {
        uint256 numerator;
        uint256 denominator;
    }

    /// An affine G1 point, with `(0, 0)` encoding the point at infinity
    struct G1Point {
        uint256 x;
        uint256 y;
    }

    /// The entrypoints exposed by the verification contracts
    interface IVerifiers {
        /// Checks that `num / den == a + b` over the BN254 scalar field.
        /// Reverts on a zero denominator.
        function rationalAdd(
            RationalWitness a,
            RationalWitness b,
            uint256 num,
            uint256 den
        ) external view returns (bool);

        /// Checks that `o_i * G == sum_j matrix[i * n + j] * s_j` for every row `i < n`.
        /// Reverts unless `1 <= n <= 6`.
        function matmul(
            uint256[36] matrix,
            uint256 n,
            G1Point[6] s,
            uint256[6] o
        ) external view returns (bool);
    }
}
