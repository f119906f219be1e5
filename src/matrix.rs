//! Pairwise distance matrices over named samples.
//!
//! Assembly computes every unordered pair of samples once and stores the
//! result symmetrically; the diagonal is defined as exactly 0 and never
//! estimated. Each pair draws its projections from a seed derived from the
//! master seed and the two sample names (order-normalized), so the matrix
//! is identical no matter which order pairs are evaluated in — the
//! sequential reference loop could be parallelized per cell without losing
//! reproducibility.

use crate::error::{Result, SwdError};
use crate::sample::{derive_seed, NamedSample};
use crate::sliced::sliced_wasserstein_seeded;
use std::path::Path;

/// A symmetric, zero-diagonal matrix of distances between named samples.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    names: Vec<String>,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    fn zeros(names: Vec<String>) -> Self {
        let n = names.len();
        Self {
            names,
            cells: vec![0.0; n * n],
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Row/column labels, in assembly order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Distance at (row, column).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.len() + j]
    }

    /// Distance between two samples looked up by name.
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        Some(self.get(i, j))
    }

    fn set_symmetric(&mut self, i: usize, j: usize, distance: f64) {
        let n = self.len();
        self.cells[i * n + j] = distance;
        self.cells[j * n + i] = distance;
    }

    /// Render as a delimited table: a header row of sample names with an
    /// empty leading cell, then one row per sample with the name first.
    pub fn to_delimited(&self, separator: char) -> String {
        let mut out = String::new();
        for name in &self.names {
            out.push(separator);
            out.push_str(name);
        }
        out.push('\n');
        for i in 0..self.len() {
            out.push_str(&self.names[i]);
            for j in 0..self.len() {
                out.push(separator);
                out.push_str(&self.get(i, j).to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Write the comma-delimited table to a file.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_delimited(','))?;
        Ok(())
    }
}

/// Assemble the full pairwise distance matrix over `samples`.
///
/// Requires at least 2 samples and a uniform dimension across all of them;
/// the error for a stray sample names both it and the reference (first)
/// sample. A single-sample call is reported as [`SwdError::TooFewSamples`]
/// rather than answered with a meaningless 1x1 zero matrix.
pub fn pairwise(
    samples: &[NamedSample],
    projections: usize,
    resolution: usize,
    seed: u64,
) -> Result<DistanceMatrix> {
    if samples.len() < 2 {
        return Err(SwdError::TooFewSamples(samples.len()));
    }
    let reference = &samples[0];
    for entry in &samples[1..] {
        if entry.sample.dim() != reference.sample.dim() {
            return Err(SwdError::MixedDimensions {
                name: entry.name.clone(),
                reference: reference.name.clone(),
                expected: reference.sample.dim(),
                got: entry.sample.dim(),
            });
        }
    }

    let names: Vec<String> = samples.iter().map(|s| s.name.clone()).collect();
    let mut matrix = DistanceMatrix::zeros(names);
    for i in 0..samples.len() {
        for j in (i + 1)..samples.len() {
            let pair_seed = pair_seed(seed, &samples[i].name, &samples[j].name);
            let d = sliced_wasserstein_seeded(
                &samples[i].sample,
                &samples[j].sample,
                projections,
                resolution,
                pair_seed,
            )?;
            matrix.set_symmetric(i, j, d);
        }
    }
    Ok(matrix)
}

/// Per-pair seed, normalized so (a, b) and (b, a) share a stream.
fn pair_seed(seed: u64, a: &str, b: &str) -> u64 {
    if a <= b {
        derive_seed(seed, &[a, b, "pair"])
    } else {
        derive_seed(seed, &[b, a, "pair"])
    }
}
