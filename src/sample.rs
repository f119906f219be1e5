//! Sample containers.
//!
//! A [`Sample`] holds the observations from one named source (typically one
//! input file). The one-dimensional and multivariate cases are distinct
//! variants, so the estimators can never silently truncate or pad a 1-D
//! sample against a 2-D one: a shape mismatch is visible at the type level
//! and reported as an error, never coerced.
//!
//! Samples are immutable after construction and always non-empty; the
//! constructors reject empty and ragged input so downstream code does not
//! re-validate.

use crate::error::{Result, SwdError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// An empirical sample: a finite sequence of observations of one fixed
/// dimension. Duplicates are kept; order is irrelevant to the estimators.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    /// One-dimensional observations.
    Uni(Vec<f64>),
    /// `dim`-dimensional observations, `dim >= 2`. Every row has length `dim`.
    Multi {
        /// Observation rows.
        points: Vec<Vec<f64>>,
        /// Row width, uniform across all rows.
        dim: usize,
    },
}

impl Sample {
    /// Build a 1-D sample.
    ///
    /// # Example
    /// ```
    /// use swd::Sample;
    ///
    /// let s = Sample::uni(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(s.dim(), 1);
    /// assert_eq!(s.len(), 3);
    /// ```
    pub fn uni(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SwdError::EmptySample("no observations".to_string()));
        }
        Ok(Sample::Uni(values))
    }

    /// Build a multivariate sample from rectangular rows.
    ///
    /// The dimension is taken from the first row; a row of a different
    /// length is a [`SwdError::RaggedRow`]. Rows of width 1 collapse to a
    /// [`Sample::Uni`], so a single numeric column always lands in 1-D mode.
    pub fn multi(points: Vec<Vec<f64>>) -> Result<Self> {
        if points.is_empty() {
            return Err(SwdError::EmptySample("no observations".to_string()));
        }
        let dim = points[0].len();
        if dim == 0 {
            return Err(SwdError::EmptySample("rows have no columns".to_string()));
        }
        for (row, point) in points.iter().enumerate() {
            if point.len() != dim {
                return Err(SwdError::RaggedRow {
                    row,
                    expected: dim,
                    got: point.len(),
                });
            }
        }
        if dim == 1 {
            return Ok(Sample::Uni(points.into_iter().map(|p| p[0]).collect()));
        }
        Ok(Sample::Multi { points, dim })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        match self {
            Sample::Uni(values) => values.len(),
            Sample::Multi { points, .. } => points.len(),
        }
    }

    /// Always false: constructors reject empty input.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observation dimension (1 for `Uni`).
    pub fn dim(&self) -> usize {
        match self {
            Sample::Uni(_) => 1,
            Sample::Multi { dim, .. } => *dim,
        }
    }

    /// The raw values of a 1-D sample, or `None` for multivariate.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Sample::Uni(values) => Some(values),
            Sample::Multi { .. } => None,
        }
    }

    /// Project every observation onto `direction` via inner product.
    ///
    /// For a `Uni` sample the single coordinate is scaled by `direction[0]`.
    pub fn project(&self, direction: &[f64]) -> Vec<f64> {
        debug_assert_eq!(direction.len(), self.dim());
        match self {
            Sample::Uni(values) => values.iter().map(|v| v * direction[0]).collect(),
            Sample::Multi { points, .. } => points
                .iter()
                .map(|p| p.iter().zip(direction).map(|(a, b)| a * b).sum())
                .collect(),
        }
    }

    /// Reduce to at most `cap` observations, chosen reproducibly.
    ///
    /// The selection stream is derived from `seed` and `name`, so the same
    /// source subsamples identically across runs regardless of what else
    /// draws randomness. A `cap` of 0 disables the cap. Selected rows keep
    /// their original relative order.
    pub fn subsample(&self, cap: usize, seed: u64, name: &str) -> Sample {
        if cap == 0 || self.len() <= cap {
            return self.clone();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(derive_seed(seed, &[name, "subsample"]));
        let mut keep = rand::seq::index::sample(&mut rng, self.len(), cap).into_vec();
        keep.sort_unstable();
        match self {
            Sample::Uni(values) => Sample::Uni(keep.iter().map(|&i| values[i]).collect()),
            Sample::Multi { points, dim } => Sample::Multi {
                points: keep.iter().map(|&i| points[i].clone()).collect(),
                dim: *dim,
            },
        }
    }
}

/// A sample labeled with its source name, as produced by the loader and
/// consumed by matrix assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedSample {
    /// Source label (typically the input file's basename).
    pub name: String,
    /// The observations.
    pub sample: Sample,
}

impl NamedSample {
    /// Pair a name with a sample.
    pub fn new(name: impl Into<String>, sample: Sample) -> Self {
        Self {
            name: name.into(),
            sample,
        }
    }
}

/// Derive a sub-seed from a master seed and a list of name tags.
///
/// Hashing keeps independent random streams (subsampling, per-pair
/// projections) from aliasing each other or the master stream.
pub(crate) fn derive_seed(seed: u64, tags: &[&str]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    for tag in tags {
        hasher.update(tag.as_bytes());
        // separator so ["ab", "c"] and ["a", "bc"] hash differently
        hasher.update([0u8]);
    }
    let hash = hasher.finalize();
    u64::from_le_bytes(hash[0..8].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uni_rejects_empty() {
        assert!(matches!(
            Sample::uni(vec![]),
            Err(SwdError::EmptySample(_))
        ));
    }

    #[test]
    fn test_multi_rejects_empty() {
        assert!(matches!(
            Sample::multi(vec![]),
            Err(SwdError::EmptySample(_))
        ));
    }

    #[test]
    fn test_multi_rejects_ragged() {
        let err = Sample::multi(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        match err {
            SwdError::RaggedRow { row, expected, got } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_single_column_collapses_to_uni() {
        let s = Sample::multi(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        assert_eq!(s, Sample::Uni(vec![1.0, 2.0, 3.0]));
        assert_eq!(s.dim(), 1);
    }

    #[test]
    fn test_dim_and_len() {
        let s = Sample::multi(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(s.dim(), 2);
        assert_eq!(s.len(), 2);
        assert!(s.values().is_none());
        assert!(!s.is_empty());
    }

    #[test]
    fn test_project_multi() {
        let s = Sample::multi(vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let p = s.project(&[1.0, 0.0]);
        assert_eq!(p, vec![1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_project_uni() {
        let s = Sample::uni(vec![1.0, -2.0]).unwrap();
        assert_eq!(s.project(&[0.5]), vec![0.5, -1.0]);
    }

    #[test]
    fn test_subsample_caps_length() {
        let s = Sample::uni((0..100).map(f64::from).collect()).unwrap();
        let small = s.subsample(10, 42, "src");
        assert_eq!(small.len(), 10);
    }

    #[test]
    fn test_subsample_is_deterministic() {
        let s = Sample::uni((0..100).map(f64::from).collect()).unwrap();
        let a = s.subsample(10, 42, "src");
        let b = s.subsample(10, 42, "src");
        assert_eq!(a, b);
    }

    #[test]
    fn test_subsample_differs_by_name() {
        let s = Sample::uni((0..100).map(f64::from).collect()).unwrap();
        let a = s.subsample(10, 42, "first.csv");
        let b = s.subsample(10, 42, "second.csv");
        assert_ne!(a, b);
    }

    #[test]
    fn test_subsample_noop_below_cap() {
        let s = Sample::uni(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.subsample(200, 0, "src"), s);
        assert_eq!(s.subsample(0, 0, "src"), s);
    }

    #[test]
    fn test_subsample_preserves_order() {
        let s = Sample::uni((0..50).map(f64::from).collect()).unwrap();
        if let Sample::Uni(values) = s.subsample(20, 7, "src") {
            let mut sorted = values.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(values, sorted);
        } else {
            panic!("expected Uni");
        }
    }

    #[test]
    fn test_derive_seed_separates_tags() {
        assert_ne!(
            derive_seed(0, &["ab", "c"]),
            derive_seed(0, &["a", "bc"])
        );
        assert_eq!(derive_seed(1, &["x"]), derive_seed(1, &["x"]));
        assert_ne!(derive_seed(1, &["x"]), derive_seed(2, &["x"]));
    }
}
