//! Constants used in the scripts

/// The environment variable toggling JSON output
pub const OUTPUT_JSON_ENV_VAR: &str = "SCRIPTS_OUTPUT_JSON";

/// The matrix dimension used by the `random` command when none is given
pub const DEFAULT_RANDOM_DIM: usize = 3;

/// The prefix of hex-encoded calldata
pub const HEX_PREFIX: &str = "0x";
