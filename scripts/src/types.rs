//! The reports printed by the scripts

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A report of a single call to one of the verification contracts
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The instance the call was built from
    pub instance: Instance,
    /// The hex-encoded calldata, including the selector
    pub calldata: String,
    /// The result of running the calldata through the native dispatcher
    pub outcome: Outcome,
}

/// The values a call was built from, as decimal strings reduced into the scalar field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instance {
    /// A `rationalAdd` claim
    RationalAdd {
        /// The first summand, as `[numerator, denominator]`
        a: [String; 2],
        /// The second summand, as `[numerator, denominator]`
        b: [String; 2],
        /// The claimed numerator
        num: String,
        /// The claimed denominator
        den: String,
    },
    /// A `matmul` claim
    Matmul {
        /// The matrix dimension
        n: usize,
        /// The flat, row-major matrix
        matrix: Vec<String>,
        /// The hidden scalars
        secrets: Vec<String>,
        /// The commitments to the hidden scalars, as `[x, y]` coordinates
        commitments: Vec<[String; 2]>,
        /// The claimed outputs
        outputs: Vec<String>,
    },
    /// Calldata supplied directly by the caller
    Raw,
}

/// The result of a call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The call returned the given boolean
    Verdict(bool),
    /// The call reverted with the given reason
    Revert(String),
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.instance {
            Instance::RationalAdd { a, b, num, den } => {
                writeln!(f, "rationalAdd")?;
                writeln!(f, "  a:   {} / {}", a[0], a[1])?;
                writeln!(f, "  b:   {} / {}", b[0], b[1])?;
                writeln!(f, "  sum: {} / {}", num, den)?;
            }
            Instance::Matmul {
                n,
                matrix,
                secrets,
                commitments,
                outputs,
            } => {
                writeln!(f, "matmul (n = {})", n)?;
                for (i, row) in matrix.chunks(*n).enumerate() {
                    writeln!(f, "  row {}: [{}]", i, row.join(", "))?;
                }
                writeln!(f, "  secrets: [{}]", secrets.join(", "))?;
                for (j, [x, y]) in commitments.iter().enumerate() {
                    writeln!(f, "  S_{}: ({}, {})", j, x, y)?;
                }
                writeln!(f, "  outputs: [{}]", outputs.join(", "))?;
            }
            Instance::Raw => writeln!(f, "raw call")?,
        }

        writeln!(f, "calldata: {}", self.calldata)?;
        write!(f, "outcome: {}", self.outcome)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Verdict(verdict) => write!(f, "{}", verdict),
            Outcome::Revert(reason) => write!(f, "reverted ({})", reason),
        }
    }
}
