//! Various utilities used throughout the contracts,
//! including constants, helpers, and backend definitions

#![cfg_attr(
    not(any(feature = "rational-adder", feature = "ec-matmul")),
    allow(dead_code)
)]

#[cfg(feature = "ec-matmul")]
pub mod backends;
pub mod constants;
pub mod helpers;
