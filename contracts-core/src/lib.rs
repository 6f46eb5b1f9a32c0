//! Core verification functionality, defined agnostically of running in the Stylus VM

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod ec_matmul;
pub mod errors;
pub mod rational_adder;
