//! Scripts for building & checking calls to the BN254 verification contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
