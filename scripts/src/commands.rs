//! Implementations of the scripts

use alloy_sol_types::SolCall;
use ark_ff::One;
use contracts_common::types::{Rational, ScalarField};
use contracts_utils::{
    calldata::{instance_calldata, rational_add_calldata},
    matmul::{random_matmul_instance, MatMulInstance},
    rational::{gen_rational_witness, random_rational_witness, RationalAddWitness},
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
    cli::{CallArgs, Contract, MatmulArgs, RandomArgs, RationalAddArgs},
    errors::ScriptError,
    types::{Instance, Report},
    utils::{
        decode_calldata, encode_calldata, execute, fmt_point, fmt_scalar, fmt_scalars,
        parse_scalar, parse_scalars,
    },
};

/// Builds & checks a `rationalAdd` call, computing the valid numerator if none is given
pub fn rational_add(args: RationalAddArgs) -> Result<Report, ScriptError> {
    let a = Rational::new(parse_scalar(&args.x1)?, parse_scalar(&args.y1)?);
    let b = Rational::new(parse_scalar(&args.x2)?, parse_scalar(&args.y2)?);
    let den = parse_scalar(&args.den)?;

    let witness = match args.num {
        Some(num) => RationalAddWitness {
            a,
            b,
            num: parse_scalar(&num)?,
            den,
        },
        None => gen_rational_witness(a, b, den)
            .map_err(|e| ScriptError::InstanceConstruction(e.to_string()))?,
    };

    rational_add_report(&witness)
}

/// Builds & checks a `matmul` call over the given matrix and hidden scalars
pub fn matmul(args: MatmulArgs) -> Result<Report, ScriptError> {
    let matrix = parse_scalars(&args.matrix)?;
    let secrets = parse_scalars(&args.secrets)?;

    let mut instance = MatMulInstance::new(matrix, secrets)
        .map_err(|e| ScriptError::InstanceConstruction(e.to_string()))?;
    if args.corrupt_output {
        info!("corrupting the first claimed output");
        instance.outputs[0] += ScalarField::one();
    }

    matmul_report(&instance)
}

/// Generates & checks a random valid instance for the given contract
pub fn random(args: RandomArgs) -> Result<Report, ScriptError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("generating a random {} instance", args.contract);

    match args.contract {
        Contract::RationalAdder => {
            let witness = random_rational_witness(&mut rng)
                .map_err(|e| ScriptError::InstanceConstruction(e.to_string()))?;
            rational_add_report(&witness)
        }
        Contract::EcMatmul => {
            let instance = random_matmul_instance(args.dim, &mut rng)
                .map_err(|e| ScriptError::InstanceConstruction(e.to_string()))?;
            matmul_report(&instance)
        }
    }
}

/// Runs the given calldata through the native dispatcher
pub fn call(args: CallArgs) -> Result<Report, ScriptError> {
    let calldata = decode_calldata(&args.calldata)?;
    let outcome = execute(&calldata)?;

    Ok(Report {
        instance: Instance::Raw,
        calldata: encode_calldata(&calldata),
        outcome,
    })
}

/// Encodes, executes & reports a `rationalAdd` call
fn rational_add_report(witness: &RationalAddWitness) -> Result<Report, ScriptError> {
    let calldata = rational_add_calldata(witness).abi_encode();
    let outcome = execute(&calldata)?;

    Ok(Report {
        instance: Instance::RationalAdd {
            a: [
                fmt_scalar(witness.a.numerator),
                fmt_scalar(witness.a.denominator),
            ],
            b: [
                fmt_scalar(witness.b.numerator),
                fmt_scalar(witness.b.denominator),
            ],
            num: fmt_scalar(witness.num),
            den: fmt_scalar(witness.den),
        },
        calldata: encode_calldata(&calldata),
        outcome,
    })
}

/// Encodes, executes & reports a `matmul` call
fn matmul_report(instance: &MatMulInstance) -> Result<Report, ScriptError> {
    let calldata = instance_calldata(instance)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
        .abi_encode();
    let outcome = execute(&calldata)?;

    Ok(Report {
        instance: Instance::Matmul {
            n: instance.n,
            matrix: fmt_scalars(&instance.matrix),
            secrets: fmt_scalars(&instance.secrets),
            commitments: instance.commitments.iter().map(fmt_point).collect(),
            outputs: fmt_scalars(&instance.outputs),
        },
        calldata: encode_calldata(&calldata),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        cli::{CallArgs, Contract, MatmulArgs, RandomArgs, RationalAddArgs},
        types::{Instance, Outcome},
    };

    use super::{call, matmul, random, rational_add};

    /// The `3/4 + 5/7` example over a denominator of 11
    fn example_args(num: Option<&str>, den: &str) -> RationalAddArgs {
        RationalAddArgs {
            x1: "3".into(),
            y1: "4".into(),
            x2: "5".into(),
            y2: "7".into(),
            den: den.into(),
            num: num.map(Into::into),
        }
    }

    /// The `[[1, 2], [3, 4]] * [5, 7]` example
    fn example_matmul_args(corrupt_output: bool) -> MatmulArgs {
        MatmulArgs {
            matrix: ["1", "2", "3", "4"].map(String::from).to_vec(),
            secrets: ["5", "7"].map(String::from).to_vec(),
            corrupt_output,
        }
    }

    #[test]
    fn test_rational_add_computes_num() {
        let report = rational_add(example_args(None, "11")).unwrap();
        assert_eq!(report.outcome, Outcome::Verdict(true));
        assert!(report.calldata.starts_with("0x"));
    }

    #[test]
    fn test_rational_add_wrong_num() {
        let report = rational_add(example_args(Some("1"), "11")).unwrap();
        assert_eq!(report.outcome, Outcome::Verdict(false));
    }

    #[test]
    fn test_rational_add_zero_den_reverts() {
        let report = rational_add(example_args(Some("1"), "0")).unwrap();
        assert_eq!(report.outcome, Outcome::Revert("division by zero".into()));

        // Without a claimed numerator there is no witness to build
        assert!(rational_add(example_args(None, "0")).is_err());
    }

    #[test]
    fn test_matmul() {
        let report = matmul(example_matmul_args(false)).unwrap();
        assert_eq!(report.outcome, Outcome::Verdict(true));
        match report.instance {
            Instance::Matmul { n, outputs, .. } => {
                assert_eq!(n, 2);
                assert_eq!(outputs, ["19", "43"]);
            }
            _ => panic!("expected a matmul instance"),
        }

        let report = matmul(example_matmul_args(true)).unwrap();
        assert_eq!(report.outcome, Outcome::Verdict(false));
    }

    #[test]
    fn test_random_is_seeded() {
        let args = || RandomArgs {
            contract: Contract::EcMatmul,
            dim: 4,
            seed: Some(42),
        };

        let report = random(args()).unwrap();
        assert_eq!(report.outcome, Outcome::Verdict(true));
        assert_eq!(report, random(args()).unwrap());

        let bad_dim = RandomArgs {
            dim: 7,
            ..args()
        };
        assert!(random(bad_dim).is_err());
    }

    #[test]
    fn test_call_replays_calldata() {
        let report = rational_add(example_args(None, "11")).unwrap();
        let replayed = call(CallArgs {
            calldata: report.calldata.clone(),
        })
        .unwrap();

        assert_eq!(replayed.instance, Instance::Raw);
        assert_eq!(replayed.calldata, report.calldata);
        assert_eq!(replayed.outcome, Outcome::Verdict(true));
    }

    #[test]
    fn test_call_unknown_selector() {
        let report = call(CallArgs {
            calldata: format!("0xdeadbeef{}", "00".repeat(32)),
        })
        .unwrap();
        assert_eq!(report.outcome, Outcome::Revert("unknown selector".into()));
    }
}
