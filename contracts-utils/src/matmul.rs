//! Instance generation for the EC matrix-multiplication verifier

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::UniformRand;
use contracts_common::{
    constants::MAX_DIM,
    types::{G1Affine, ScalarField},
};
use eyre::{eyre, Result};
use rand::Rng;

/// An instance of the matrix-multiplication relation, together with the hidden
/// scalars it was generated from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatMulInstance {
    /// The dimension of the matrix
    pub n: usize,
    /// The flat, row-major `n x n` matrix
    pub matrix: Vec<ScalarField>,
    /// The hidden scalars
    pub secrets: Vec<ScalarField>,
    /// The commitments `s_j * G` to the hidden scalars
    pub commitments: Vec<G1Affine>,
    /// The product of the matrix with the hidden scalars
    pub outputs: Vec<ScalarField>,
}

impl MatMulInstance {
    /// Builds a valid instance from a flat matrix and the hidden scalars,
    /// inferring the dimension from the number of scalars
    pub fn new(matrix: Vec<ScalarField>, secrets: Vec<ScalarField>) -> Result<Self> {
        let n = secrets.len();
        if n == 0 || n > MAX_DIM {
            return Err(eyre!("dimension {n} outside of [1, {MAX_DIM}]"));
        }
        if matrix.len() != n * n {
            return Err(eyre!(
                "expected {} matrix entries for dimension {n}, got {}",
                n * n,
                matrix.len()
            ));
        }

        let commitments = commit_scalars(&secrets);
        let outputs = mat_vec(&matrix, &secrets, n);
        Ok(Self {
            n,
            matrix,
            secrets,
            commitments,
            outputs,
        })
    }
}

/// Computes the commitment `k * G`; a zero scalar yields the point at infinity
pub fn g_mul(k: ScalarField) -> G1Affine {
    (G1Affine::generator() * k).into_affine()
}

/// Commits to each of the given scalars
pub fn commit_scalars(secrets: &[ScalarField]) -> Vec<G1Affine> {
    secrets.iter().copied().map(g_mul).collect()
}

/// Multiplies the flat, row-major `n x n` matrix by the given vector over the scalar field
pub fn mat_vec(matrix: &[ScalarField], scalars: &[ScalarField], n: usize) -> Vec<ScalarField> {
    if n == 0 {
        return Vec::new();
    }

    matrix
        .chunks_exact(n)
        .take(n)
        .map(|row| row.iter().zip(scalars).map(|(m, s)| *m * s).sum())
        .collect()
}

/// Generates a random valid instance of dimension `n`, with uniformly random
/// matrix entries and hidden scalars
pub fn random_matmul_instance<R: Rng>(n: usize, rng: &mut R) -> Result<MatMulInstance> {
    let matrix = (0..n * n).map(|_| ScalarField::rand(rng)).collect();
    let secrets = (0..n).map(|_| ScalarField::rand(rng)).collect();
    MatMulInstance::new(matrix, secrets)
}

#[cfg(test)]
mod tests {
    use ark_ec::{AffineRepr, CurveGroup};
    use contracts_common::{
        constants::MAX_DIM,
        types::{G1Affine, ScalarField},
    };
    use rand::thread_rng;

    use super::{g_mul, mat_vec, random_matmul_instance, MatMulInstance};

    /// Lifts small integers into scalars
    fn scalars(values: &[u64]) -> Vec<ScalarField> {
        values.iter().map(|v| ScalarField::from(*v)).collect()
    }

    #[test]
    fn test_mat_vec() {
        let matrix = scalars(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let vector = scalars(&[1, 0, 2]);
        assert_eq!(mat_vec(&matrix, &vector, 3), scalars(&[7, 16, 25]));
    }

    #[test]
    fn test_g_mul() {
        assert!(g_mul(ScalarField::from(0_u64)).is_zero());
        assert_eq!(g_mul(ScalarField::from(1_u64)), G1Affine::generator());

        let two_g = (G1Affine::generator() + G1Affine::generator()).into_affine();
        assert_eq!(g_mul(ScalarField::from(2_u64)), two_g);
    }

    #[test]
    fn test_instance_dimensions() {
        let mut rng = thread_rng();
        assert!(random_matmul_instance(0, &mut rng).is_err());
        assert!(random_matmul_instance(MAX_DIM + 1, &mut rng).is_err());

        let instance = random_matmul_instance(MAX_DIM, &mut rng).unwrap();
        assert_eq!(instance.matrix.len(), MAX_DIM * MAX_DIM);
        assert_eq!(instance.commitments.len(), MAX_DIM);
        assert_eq!(instance.outputs.len(), MAX_DIM);
    }

    #[test]
    fn test_mismatched_matrix_rejected() {
        assert!(MatMulInstance::new(scalars(&[1, 2, 3]), scalars(&[1, 2])).is_err());
    }
}
