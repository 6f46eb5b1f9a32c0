//! The BN254 verification contracts, compiled to WASM for the Stylus VM.
//!
//! Each contract is gated behind its own feature and is built on its own, as
//! a Stylus binary exposes a single entrypoint.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

mod contracts;
mod utils;
