//! Sliced Wasserstein estimator for multivariate samples.
//!
//! Optimal-transport distances are cheap in one dimension (quantile
//! functions, see [`crate::quantile`]) and expensive in several. The sliced
//! estimator exploits that: project both samples onto a random unit
//! direction, take the 1-D distance of the projections, and average over
//! many directions. One-dimensional samples skip the projection entirely
//! and delegate to the 1-D estimator, so no randomness enters in that case.
//!
//! Directions are drawn from an explicitly passed, seedable generator.
//! The same seed and inputs always produce bit-identical output.

use crate::error::{Result, SwdError};
use crate::quantile::wasserstein_1d;
use crate::sample::Sample;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Default number of projection trials.
pub const DEFAULT_PROJECTIONS: usize = 64;

/// Norm below which a Gaussian draw is considered degenerate and redrawn.
const NORM_FLOOR: f64 = 1e-12;

/// Draw a uniformly random unit direction in R^dim.
///
/// An isotropic Gaussian draw normalized to unit length. A draw whose norm
/// falls under [`NORM_FLOOR`] is discarded and retried; such draws are
/// measure-zero events, not errors.
fn unit_direction(dim: usize, rng: &mut ChaCha8Rng) -> Vec<f64> {
    loop {
        let raw: Vec<f64> = (0..dim).map(|_| StandardNormal.sample(rng)).collect();
        let norm = raw.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm > NORM_FLOOR {
            return raw.iter().map(|c| c / norm).collect();
        }
    }
}

/// Sliced Wasserstein distance between two samples of equal dimension.
///
/// For 1-D samples this is exactly [`wasserstein_1d`] on the raw values.
/// For dimension >= 2 it is the arithmetic mean of `projections` 1-D
/// distances along unit directions drawn from `rng`. Mismatched dimensions
/// are an input-shape error; mixed 1-D/n-D pairs can never be coerced.
pub fn sliced_wasserstein(
    x: &Sample,
    y: &Sample,
    projections: usize,
    resolution: usize,
    rng: &mut ChaCha8Rng,
) -> Result<f64> {
    match (x, y) {
        (Sample::Uni(xv), Sample::Uni(yv)) => wasserstein_1d(xv, yv, resolution),
        (Sample::Multi { dim: dx, .. }, Sample::Multi { dim: dy, .. }) if dx == dy => {
            if projections == 0 {
                return Err(SwdError::InvalidProjections(0));
            }
            let mut total = 0.0;
            for _ in 0..projections {
                let direction = unit_direction(*dx, rng);
                let xp = x.project(&direction);
                let yp = y.project(&direction);
                total += wasserstein_1d(&xp, &yp, resolution)?;
            }
            Ok(total / projections as f64)
        }
        _ => Err(SwdError::DimensionMismatch {
            expected: x.dim(),
            got: y.dim(),
        }),
    }
}

/// Seeded convenience wrapper around [`sliced_wasserstein`].
pub fn sliced_wasserstein_seeded(
    x: &Sample,
    y: &Sample,
    projections: usize,
    resolution: usize,
    seed: u64,
) -> Result<f64> {
    use rand::SeedableRng;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sliced_wasserstein(x, y, projections, resolution, &mut rng)
}
