//! Design Structure Matrix (DSM).
//!
//! Entry `(i, j)` is true when component `i` depends on component `j`, i.e.
//! changing `i` requires changing `j`. Dependencies are one-way and a
//! component never depends on itself.
//!
//! The matrix is kept dense for readers (heatmaps, exports) and mirrored as an
//! adjacency list so that an innovation attempt looks up its targets in
//! O(|Ai|) rather than scanning a full row.

use crate::error::ModelError;
use crate::params::validate_density;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Directed dependency relation between `N` components.
#[derive(Debug, Clone, PartialEq)]
pub struct Dsm {
    /// Dense N×N matrix, diagonal always false
    matrix: DMatrix<bool>,

    /// Row `i` lists every `j` with `matrix[(i, j)]`, ascending
    dependents: Vec<Vec<usize>>,
}

impl Dsm {
    /// Creates a DSM with no dependencies.
    pub fn empty(n: usize) -> Self {
        Self::from_matrix(DMatrix::from_element(n, n, false))
    }

    /// Samples every off-diagonal entry independently with probability `density`.
    ///
    /// Entries are drawn row by row, left to right, skipping the diagonal.
    pub fn random<R: Rng + ?Sized>(n: usize, density: f64, rng: &mut R) -> Result<Self, ModelError> {
        let coin = bernoulli(density)?;
        let mut matrix = DMatrix::from_element(n, n, false);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[(i, j)] = coin.sample(rng);
                }
            }
        }
        Ok(Self::from_matrix(matrix))
    }

    /// Samples only the strictly upper triangle (`j > i`), producing an
    /// acyclic dependency structure.
    pub fn random_acyclic<R: Rng + ?Sized>(
        n: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        let coin = bernoulli(density)?;
        let mut matrix = DMatrix::from_element(n, n, false);
        for i in 0..n {
            for j in (i + 1)..n {
                matrix[(i, j)] = coin.sample(rng);
            }
        }
        Ok(Self::from_matrix(matrix))
    }

    /// Builds a DSM from explicit `(i, j)` pairs meaning "i depends on j".
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, ModelError> {
        let mut matrix = DMatrix::from_element(n, n, false);
        for &(i, j) in edges {
            if i >= n || j >= n {
                return Err(ModelError::invalid(
                    "dsm",
                    format!("edge ({}, {}) out of range for {} components", i, j, n),
                ));
            }
            if i == j {
                return Err(ModelError::invalid(
                    "dsm",
                    format!("component {} cannot depend on itself", i),
                ));
            }
            matrix[(i, j)] = true;
        }
        Ok(Self::from_matrix(matrix))
    }

    fn from_matrix(matrix: DMatrix<bool>) -> Self {
        let n = matrix.nrows();
        let dependents = (0..n)
            .map(|i| (0..n).filter(|&j| matrix[(i, j)]).collect())
            .collect();
        Self { matrix, dependents }
    }

    /// Number of components.
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Returns true if component `i` depends on component `j`.
    pub fn depends_on(&self, i: usize, j: usize) -> bool {
        i < self.size() && j < self.size() && self.matrix[(i, j)]
    }

    /// Components that `i` depends on, ascending. Empty for out-of-range `i`.
    pub fn dependents_of(&self, i: usize) -> &[usize] {
        self.dependents.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Outgoing dependency count per component (row sums).
    pub fn outgoing_counts(&self) -> Vec<usize> {
        self.dependents.iter().map(Vec::len).collect()
    }

    /// Incoming dependency count per component (column sums).
    pub fn incoming_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.size()];
        for row in &self.dependents {
            for &j in row {
                counts[j] += 1;
            }
        }
        counts
    }

    /// Total number of dependencies.
    pub fn edge_count(&self) -> usize {
        self.dependents.iter().map(Vec::len).sum()
    }

    /// Realized fraction of off-diagonal entries that are set.
    pub fn density(&self) -> f64 {
        let n = self.size();
        if n < 2 {
            return 0.0;
        }
        self.edge_count() as f64 / (n * (n - 1)) as f64
    }

    /// All `(i, j)` dependencies in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dependents
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&j| (i, j)))
    }

    /// Row-major copy of the matrix, for serialization.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|i| (0..self.size()).map(|j| self.matrix[(i, j)]).collect())
            .collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<bool> {
        &self.matrix
    }
}

fn bernoulli(density: f64) -> Result<Bernoulli, ModelError> {
    validate_density(density)?;
    Bernoulli::new(density).map_err(|e| ModelError::invalid("density", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_diagonal_is_false() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for density in [0.0, 0.3, 1.0] {
            let dsm = Dsm::random(12, density, &mut rng).unwrap();
            for i in 0..12 {
                assert!(!dsm.depends_on(i, i));
            }
        }
    }

    #[test]
    fn test_zero_density_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dsm = Dsm::random(4, 0.0, &mut rng).unwrap();
        assert_eq!(dsm.edge_count(), 0);
        assert_eq!(dsm, Dsm::empty(4));
    }

    #[test]
    fn test_full_density_sets_every_off_diagonal() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dsm = Dsm::random(5, 1.0, &mut rng).unwrap();
        assert_eq!(dsm.edge_count(), 20);
        assert_eq!(dsm.density(), 1.0);
        assert_eq!(dsm.dependents_of(2), &[0, 1, 3, 4]);
    }

    #[test]
    fn test_acyclic_is_strictly_upper_triangular() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let dsm = Dsm::random_acyclic(10, 0.5, &mut rng).unwrap();
        for (i, j) in dsm.edges() {
            assert!(j > i, "edge ({}, {}) below diagonal", i, j);
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = Dsm::random(20, 0.2, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = Dsm::random(20, 0.2, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_density_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = Dsm::random(3, 1.2, &mut rng).unwrap_err();
        assert_eq!(err.parameter(), "density");
    }

    #[test]
    fn test_chain_from_edges() {
        // A -> B -> C -> D
        let dsm = Dsm::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(dsm.outgoing_counts(), vec![1, 1, 1, 0]);
        assert_eq!(dsm.incoming_counts(), vec![0, 1, 1, 1]);
        assert!(dsm.depends_on(0, 1));
        assert!(!dsm.depends_on(1, 0));
        assert!(dsm.dependents_of(3).is_empty());
        assert_eq!(dsm.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_from_edges_rejects_bad_edges() {
        assert!(Dsm::from_edges(3, &[(1, 1)]).is_err());
        assert!(Dsm::from_edges(3, &[(0, 3)]).is_err());
    }

    #[test]
    fn test_rows_match_matrix() {
        let dsm = Dsm::from_edges(3, &[(2, 0)]).unwrap();
        assert_eq!(
            dsm.rows(),
            vec![
                vec![false, false, false],
                vec![false, false, false],
                vec![true, false, false],
            ]
        );
    }

    #[test]
    fn test_single_component_density() {
        let dsm = Dsm::empty(1);
        assert_eq!(dsm.density(), 0.0);
        assert!(dsm.dependents_of(0).is_empty());
    }
}
