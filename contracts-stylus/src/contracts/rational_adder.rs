//! The rational adder contract, which checks claimed sums of two rationals
//! over the BN254 scalar field

use alloc::vec::Vec;
use contracts_core::rational_adder::RationalAdder;
use stylus_sdk::{alloy_primitives::U256, prelude::*};

use crate::utils::helpers::{map_verifier_error, word_from_abi};

/// The rational adder contract, which itself is stateless
#[storage]
#[entrypoint]
struct RationalAdderContract;

#[public]
impl RationalAdderContract {
    /// Returns whether `num / den == a.0 / a.1 + b.0 / b.1`.
    ///
    /// Reverts with "division by zero" if any denominator is zero modulo the field order.
    pub fn rational_add(
        &self,
        a: (U256, U256),
        b: (U256, U256),
        num: U256,
        den: U256,
    ) -> Result<bool, Vec<u8>> {
        RationalAdder::verify_calldata(
            (word_from_abi(a.0), word_from_abi(a.1)),
            (word_from_abi(b.0), word_from_abi(b.1)),
            word_from_abi(num),
            word_from_abi(den),
        )
        .map_err(map_verifier_error)
    }
}
