//! Verification of a matrix-vector product over hidden scalars.
//!
//! Given a public `n x n` matrix `M`, commitments `S_j = s_j * G` to hidden
//! scalars `s_j`, and a claimed output vector `o`, the verifier checks for each row `i`
//! that `sum_j M[i][j] * S_j == o_i * G`. This holds iff `o = M * s`, yet the
//! verifier never learns any `s_j`.

use alloc::vec::Vec;
use alloy_primitives::U256;
use ark_ec::AffineRepr;
use contracts_common::{
    backends::G1ArithmeticBackend,
    constants::{MAX_DIM, MAX_MATRIX_ENTRIES},
    custom_serde::{g1_from_coords, u256_to_scalar},
    types::{G1Affine, ScalarField},
};
use core::marker::PhantomData;

use crate::errors::VerifierError;

/// The EC matrix-multiplication verifier, which is defined generically over an
/// elliptic curve arithmetic backend
pub struct EcMatMulVerifier<G: G1ArithmeticBackend> {
    /// Marker for the arithmetic backend
    _phantom: PhantomData<G>,
}

impl<G: G1ArithmeticBackend> EcMatMulVerifier<G> {
    /// Verify that `outputs[..n]` is the product of the flat, row-major `n x n`
    /// matrix with the scalars committed to in `commitments[..n]`.
    ///
    /// Entries beyond the first `n * n` matrix elements, `n` commitments & `n` outputs
    /// are padding and are ignored.
    pub fn verify(
        matrix: &[ScalarField],
        n: usize,
        commitments: &[G1Affine],
        outputs: &[ScalarField],
    ) -> Result<bool, VerifierError> {
        check_dimension(n)?;
        if matrix.len() < n * n || commitments.len() < n || outputs.len() < n {
            return Err(VerifierError::InvalidInputs);
        }

        let commitments = &commitments[..n];
        for (row, output) in matrix[..n * n].chunks_exact(n).zip(outputs) {
            if !Self::verify_row(row, commitments, *output)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Verify a claim given as the raw `uint256` words of the `matmul` entrypoint.
    ///
    /// Matrix entries and outputs are reduced modulo the scalar field order;
    /// only the first `n` points are decoded, and each must be on the curve or `(0, 0)`.
    pub fn verify_calldata(
        matrix: &[U256; MAX_MATRIX_ENTRIES],
        n: U256,
        points: &[(U256, U256); MAX_DIM],
        outputs: &[U256; MAX_DIM],
    ) -> Result<bool, VerifierError> {
        let n = dimension_from_word(n)?;

        let matrix: Vec<ScalarField> = matrix[..n * n]
            .iter()
            .copied()
            .map(u256_to_scalar)
            .collect();
        let commitments = points[..n]
            .iter()
            .map(|(x, y)| g1_from_coords(*x, *y))
            .collect::<Result<Vec<_>, _>>()?;
        let outputs: Vec<ScalarField> = outputs[..n]
            .iter()
            .copied()
            .map(u256_to_scalar)
            .collect();

        Self::verify(&matrix, n, &commitments, &outputs)
    }

    /// Checks a single row of the product, i.e. `<row, commitments> == output * G`
    fn verify_row(
        row: &[ScalarField],
        commitments: &[G1Affine],
        output: ScalarField,
    ) -> Result<bool, VerifierError> {
        let combination = G::msm(row, commitments)?;
        let expected = G::ec_scalar_mul(output, G1Affine::generator())?;

        Ok(combination == expected)
    }
}

/// Checks that `1 <= n <= MAX_DIM`
fn check_dimension(n: usize) -> Result<(), VerifierError> {
    if n == 0 || n > MAX_DIM {
        return Err(VerifierError::InvalidDimension);
    }

    Ok(())
}

/// Interprets a `uint256` word as a matrix dimension, validating its range
fn dimension_from_word(n: U256) -> Result<usize, VerifierError> {
    if n > U256::from(MAX_DIM) {
        return Err(VerifierError::InvalidDimension);
    }

    // The word is at most `MAX_DIM`, so it fits in its lowest limb
    let n = n.as_limbs()[0] as usize;
    check_dimension(n)?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::One;
    use ark_std::UniformRand;
    use contracts_common::{
        constants::{MAX_DIM, MAX_MATRIX_ENTRIES},
        custom_serde::{g1_to_coords, scalar_to_u256},
        types::{G1Affine, ScalarField},
    };
    use contracts_utils::{
        backends::{ArkG1ArithmeticBackend, NativePrecompileBackend},
        matmul::{commit_scalars, mat_vec, random_matmul_instance},
    };
    use rand::thread_rng;

    use crate::errors::VerifierError;

    use super::EcMatMulVerifier;

    type ArkVerifier = EcMatMulVerifier<ArkG1ArithmeticBackend>;

    /// Converts scalars to the small integers they were built from, for readability
    fn scalars(values: &[u64]) -> alloc::vec::Vec<ScalarField> {
        values.iter().map(|v| ScalarField::from(*v)).collect()
    }

    #[test]
    fn test_manual_example() {
        let n = 2;
        let matrix = scalars(&[1, 2, 3, 4]);
        let secrets = scalars(&[5, 7]);

        let commitments = commit_scalars(&secrets);
        let outputs = mat_vec(&matrix, &secrets, n);
        assert_eq!(outputs, scalars(&[19, 43]));

        assert!(ArkVerifier::verify(&matrix, n, &commitments, &outputs).unwrap());
    }

    #[test]
    fn test_valid_random_instances() {
        let mut rng = thread_rng();
        for n in 1..=MAX_DIM {
            let instance = random_matmul_instance(n, &mut rng).unwrap();
            assert!(ArkVerifier::verify(
                &instance.matrix,
                n,
                &instance.commitments,
                &instance.outputs
            )
            .unwrap());
        }
    }

    #[test]
    fn test_corrupted_output_fails() {
        let mut rng = thread_rng();
        let n = 3;
        let mut instance = random_matmul_instance(n, &mut rng).unwrap();
        instance.outputs[n - 1] += ScalarField::one();

        assert!(!ArkVerifier::verify(
            &instance.matrix,
            n,
            &instance.commitments,
            &instance.outputs
        )
        .unwrap());
    }

    #[test]
    fn test_wrong_commitment_fails() {
        let mut rng = thread_rng();
        let n = 2;
        let mut instance = random_matmul_instance(n, &mut rng).unwrap();
        instance.commitments[0] = (instance.commitments[0] + G1Affine::generator()).into_affine();

        // Fails unless the first column is entirely zero, which is negligible
        assert!(!ArkVerifier::verify(
            &instance.matrix,
            n,
            &instance.commitments,
            &instance.outputs
        )
        .unwrap());
    }

    #[test]
    fn test_invalid_dimension() {
        let matrix = [ScalarField::one(); MAX_MATRIX_ENTRIES];
        let commitments = [G1Affine::generator(); MAX_DIM + 1];
        let outputs = [ScalarField::one(); MAX_DIM + 1];

        for n in [0, MAX_DIM + 1] {
            assert_eq!(
                ArkVerifier::verify(&matrix, n, &commitments, &outputs),
                Err(VerifierError::InvalidDimension)
            );
        }
    }

    #[test]
    fn test_short_inputs() {
        let matrix = scalars(&[1, 2, 3]);
        let commitments = [G1Affine::generator(); 2];
        let outputs = scalars(&[1, 2]);

        assert_eq!(
            ArkVerifier::verify(&matrix, 2, &commitments, &outputs),
            Err(VerifierError::InvalidInputs)
        );
    }

    #[test]
    fn test_calldata_ignores_padding() {
        let mut rng = thread_rng();
        let n = 2;
        let instance = random_matmul_instance(n, &mut rng).unwrap();

        let mut matrix = [U256::ZERO; MAX_MATRIX_ENTRIES];
        for (word, entry) in matrix.iter_mut().zip(&instance.matrix) {
            *word = scalar_to_u256(*entry);
        }
        let mut points = [(U256::from(1_u64), U256::from(3_u64)); MAX_DIM];
        for (point, commitment) in points.iter_mut().zip(&instance.commitments) {
            *point = g1_to_coords(commitment);
        }
        let mut outputs = [U256::from(12345_u64); MAX_DIM];
        for (word, output) in outputs.iter_mut().zip(&instance.outputs) {
            *word = scalar_to_u256(*output);
        }

        // Padding points are off-curve and padding outputs are garbage, neither is checked
        assert!(ArkVerifier::verify_calldata(&matrix, U256::from(n), &points, &outputs).unwrap());

        // Widening the dimension pulls an off-curve padding point into the check
        assert_eq!(
            ArkVerifier::verify_calldata(&matrix, U256::from(n + 1), &points, &outputs),
            Err(VerifierError::InvalidPoint)
        );
    }

    #[test]
    fn test_calldata_huge_dimension() {
        let matrix = [U256::ZERO; MAX_MATRIX_ENTRIES];
        let points = [(U256::ZERO, U256::ZERO); MAX_DIM];
        let outputs = [U256::ZERO; MAX_DIM];

        assert_eq!(
            ArkVerifier::verify_calldata(&matrix, U256::MAX, &points, &outputs),
            Err(VerifierError::InvalidDimension)
        );
        assert_eq!(
            ArkVerifier::verify_calldata(&matrix, U256::ZERO, &points, &outputs),
            Err(VerifierError::InvalidDimension)
        );
    }

    #[test]
    fn test_zero_secrets_use_identity() {
        // A zero secret commits to the point at infinity, encoded as (0, 0)
        let n = 2;
        let matrix = scalars(&[3, 1, 4, 1]);
        let secrets = scalars(&[0, 9]);
        let commitments = commit_scalars(&secrets);
        assert!(commitments[0].is_zero());

        let outputs = mat_vec(&matrix, &secrets, n);
        assert!(ArkVerifier::verify(&matrix, n, &commitments, &outputs).unwrap());
    }

    #[test]
    fn test_backends_agree() {
        let mut rng = thread_rng();
        let n = 4;
        let mut instance = random_matmul_instance(n, &mut rng).unwrap();

        let verdict = |instance: &contracts_utils::matmul::MatMulInstance| {
            let ark = ArkVerifier::verify(
                &instance.matrix,
                n,
                &instance.commitments,
                &instance.outputs,
            )
            .unwrap();
            let precompile = EcMatMulVerifier::<NativePrecompileBackend>::verify(
                &instance.matrix,
                n,
                &instance.commitments,
                &instance.outputs,
            )
            .unwrap();
            assert_eq!(ark, precompile);
            ark
        };

        assert!(verdict(&instance));
        instance.outputs[1] = ScalarField::rand(&mut rng);
        assert!(!verdict(&instance));
    }
}
