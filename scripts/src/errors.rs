//! Definitions of errors that can occur during the execution of the scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error parsing a numeric argument
    ArgParsing(String),
    /// Error constructing a verification instance
    InstanceConstruction(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error decoding the return data of a contract method
    ReturnDecoding(String),
    /// Error serializing the script output
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArgParsing(s) => write!(f, "error parsing argument: {}", s),
            ScriptError::InstanceConstruction(s) => write!(f, "error constructing instance: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ReturnDecoding(s) => write!(f, "error decoding return data: {}", s),
            ScriptError::Serde(s) => write!(f, "error serializing output: {}", s),
        }
    }
}

impl Error for ScriptError {}
