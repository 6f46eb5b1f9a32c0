//! Common utilities used outside of the Stylus contracts themselves, e.g. for scripts & testing

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod backends;
pub mod calldata;
pub mod matmul;
pub mod rational;
