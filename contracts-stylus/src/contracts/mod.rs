//! The verification contracts

#[cfg(feature = "rational-adder")]
mod rational_adder;

#[cfg(feature = "ec-matmul")]
mod ec_matmul;
