//! Definitions of CLI arguments and commands for the scripts

use std::fmt::{self, Display};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    commands::{call, matmul, random, rational_add},
    constants::{DEFAULT_RANDOM_DIM, OUTPUT_JSON_ENV_VAR},
    errors::ScriptError,
    types::Report,
};

/// Build calldata for the verification contracts and check it natively
#[derive(Parser)]
pub struct Cli {
    /// Print the report as JSON
    #[arg(long, global = true, env = OUTPUT_JSON_ENV_VAR)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Check a claimed sum of two rationals
    RationalAdd(RationalAddArgs),
    /// Check a claimed matrix product over committed scalars
    Matmul(MatmulArgs),
    /// Generate & check a random valid instance
    Random(RandomArgs),
    /// Run raw calldata through the native dispatcher
    Call(CallArgs),
}

impl Command {
    /// Runs the command, returning a report of the call it built
    pub fn run(self) -> Result<Report, ScriptError> {
        match self {
            Command::RationalAdd(args) => rational_add(args),
            Command::Matmul(args) => matmul(args),
            Command::Random(args) => random(args),
            Command::Call(args) => call(args),
        }
    }
}

/// Check that `num / den == x1 / y1 + x2 / y2`.
///
/// All values are decimal or `0x`-prefixed hex integers, reduced modulo the
/// scalar field order.
#[derive(Args)]
pub struct RationalAddArgs {
    /// Numerator of the first summand
    #[arg(long)]
    pub x1: String,

    /// Denominator of the first summand
    #[arg(long)]
    pub y1: String,

    /// Numerator of the second summand
    #[arg(long)]
    pub x2: String,

    /// Denominator of the second summand
    #[arg(long)]
    pub y2: String,

    /// Denominator of the claimed sum
    #[arg(long)]
    pub den: String,

    /// Numerator of the claimed sum, computed from the other values when omitted
    #[arg(long)]
    pub num: Option<String>,
}

/// Check that the claimed outputs are the product of the matrix with the secrets
#[derive(Args)]
pub struct MatmulArgs {
    /// The flat, row-major matrix entries
    #[arg(long, value_delimiter = ',', required = true)]
    pub matrix: Vec<String>,

    /// The hidden scalars, whose count sets the dimension
    #[arg(long, value_delimiter = ',', required = true)]
    pub secrets: Vec<String>,

    /// Add one to the first claimed output, so that verification fails
    #[arg(long)]
    pub corrupt_output: bool,
}

/// Generate a random valid instance for one of the contracts
#[derive(Args)]
pub struct RandomArgs {
    /// The contract to generate an instance for
    #[arg(short, long)]
    pub contract: Contract,

    /// The matrix dimension, for the EC matrix-multiplication contract
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_DIM)]
    pub dim: usize,

    /// Seed for the instance RNG, sampled from entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Run arbitrary calldata through the native dispatcher
#[derive(Args)]
pub struct CallArgs {
    /// The hex-encoded calldata, including the selector
    #[arg(long)]
    pub calldata: String,
}

/// The verification contracts
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contract {
    /// The rational adder
    RationalAdder,
    /// The EC matrix-multiplication verifier
    EcMatmul,
}

impl Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contract::RationalAdder => write!(f, "rational-adder"),
            Contract::EcMatmul => write!(f, "ec-matmul"),
        }
    }
}
