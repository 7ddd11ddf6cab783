//! Randomized verification of claimed GF(2) matrix products
//!
//! Freivalds' check: instead of computing A·B outright, probe the claim
//! A·B = C with random vectors x and compare A·(B·x) against C·x. A
//! disagreement certifies a bad element and names the row it lives in;
//! a deterministic scan of that row then pins down the exact column.
//! Agreement across every probe is reported as "no defect found", which
//! is a probabilistically qualified outcome, not a proof.

use crate::bitvec::BitVector;
use crate::matrix::BitMatrix;
use log::debug;
use rand::Rng;

/// Default probe budget; the chance of missing a non-degenerate defect
/// is at most 2^-iterations
pub const DEFAULT_ITERATIONS: usize = 20;

/// One position where the claimed product disagrees with A·B,
/// in natural 0-based indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defect {
    pub row: usize,
    pub col: usize,
}

/// Verifier tuning, surfaced as explicit configuration
#[derive(Debug, Clone, Copy)]
pub struct VerifierConfig {
    /// Number of random probes per test case
    pub iterations: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        VerifierConfig {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Search for a position where A·B ≠ C.
///
/// Runs up to `config.iterations` random probes against the claim and, on
/// the first row-level disagreement, localizes the exact column. `None`
/// means no probe found evidence of a defect; for C = A·B exactly this is
/// guaranteed, otherwise it is a false negative with probability at most
/// 2^-iterations. The caller owns the generator, so runs are reproducible
/// for a fixed seed.
pub fn find_defect<R: Rng>(
    a: &BitMatrix,
    b: &BitMatrix,
    c: &BitMatrix,
    config: VerifierConfig,
    rng: &mut R,
) -> Option<Defect> {
    let size = a.size();
    assert_eq!(b.size(), size, "matrix dimensions must agree");
    assert_eq!(c.size(), size, "matrix dimensions must agree");

    for probe in 0..config.iterations {
        let x = BitVector::random(rng, size);
        let bx = b.mul_vector(&x);
        let abx = a.mul_vector(&bx);
        let cx = c.mul_vector(&x);

        if let Some(row) = abx.first_diff(&cx) {
            debug!("probe {}: claimed product disagrees in row {}", probe, row);
            return Some(locate(a, b, c, row));
        }
    }

    debug!("no disagreement after {} probes", config.iterations);
    None
}

/// Pin down the disagreeing column in a row certified by a probe.
///
/// Computes A[row]·B exactly and scans it against C[row], lowest column
/// first. The probe already proved this row of A·B XOR C is nonzero, so
/// the scan always finds a column; this phase is deterministic.
pub fn locate(a: &BitMatrix, b: &BitMatrix, c: &BitMatrix, row: usize) -> Defect {
    let ab = b.vector_mul(a.row(row));
    let col = ab
        .first_diff(c.row(row))
        .expect("probed row must contain a mismatching column");
    Defect { row, col }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> VerifierConfig {
        // deeper budget than the default keeps the miss probability
        // far below anything a test run could observe
        VerifierConfig { iterations: 40 }
    }

    fn flip(matrix: &BitMatrix, row: usize, col: usize) -> BitMatrix {
        let mut rows = Vec::with_capacity(matrix.size());
        for index in 0..matrix.size() {
            rows.push(matrix.row(index).clone());
        }
        let current = rows[row].get(col);
        rows[row].set(col, !current);
        BitMatrix::from_rows(rows)
    }

    #[test]
    fn test_exact_identity_product_has_no_defect() {
        let identity = BitMatrix::identity(17);
        let mut rng = StdRng::seed_from_u64(42);
        let result = find_defect(&identity, &identity, &identity, test_config(), &mut rng);
        assert_eq!(result, None);
    }

    #[test]
    fn test_zero_product_has_no_defect() {
        let zero = BitMatrix::zeros(8);
        let mut rng = StdRng::seed_from_u64(42);
        let result = find_defect(&zero, &zero, &zero, test_config(), &mut rng);
        assert_eq!(result, None);
    }

    #[test]
    fn test_single_flipped_bit_is_found_exactly() {
        let identity = BitMatrix::identity(17);
        let c = flip(&identity, 5, 11);
        let mut rng = StdRng::seed_from_u64(42);
        let result = find_defect(&identity, &identity, &c, test_config(), &mut rng);
        assert_eq!(result, Some(Defect { row: 5, col: 11 }));
    }

    #[test]
    fn test_found_defect_is_real() {
        let mut rng = StdRng::seed_from_u64(1234);
        let size = 23;
        let a = BitMatrix::from_rows(
            (0..size)
                .map(|_| BitVector::random(&mut rng, size))
                .collect(),
        );
        let b = BitMatrix::from_rows(
            (0..size)
                .map(|_| BitVector::random(&mut rng, size))
                .collect(),
        );
        let product = a.mul(&b);
        let c = flip(&product, 20, 3);

        let defect =
            find_defect(&a, &b, &c, test_config(), &mut rng).expect("planted defect must be found");
        assert_ne!(
            product.get(defect.row, defect.col),
            c.get(defect.row, defect.col)
        );
    }

    #[test]
    fn test_locate_scans_lowest_column_first() {
        let identity = BitMatrix::identity(6);
        // two defects in row 2; locate must report the lower column
        let c = flip(&flip(&identity, 2, 4), 2, 1);
        let defect = locate(&identity, &identity, &c, 2);
        assert_eq!(defect, Defect { row: 2, col: 1 });
    }

    #[test]
    fn test_find_defect_is_reproducible() {
        let a = BitMatrix::identity(9);
        let c = BitMatrix::zeros(9);
        let first = find_defect(&a, &a, &c, test_config(), &mut StdRng::seed_from_u64(3));
        let second = find_defect(&a, &a, &c, test_config(), &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
