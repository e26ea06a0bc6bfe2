//! Reproduction and survivor selection.
//!
//! A generation passes through three stages:
//!
//! 1. [`child_count`]: each parent's brood size, scaled by how far its score
//!    sits from the population mean
//! 2. [`select_fittest`]: truncation selection removing a share of the
//!    surplus by fitness rank
//! 3. [`bottleneck`]: a random cull of whatever surplus is left
//!
//! Stages 2 and 3 split the surplus between selection and drift according to
//! the selection pressure.

use crate::error::{EvolutionError, Result};
use crate::genotype::Hand;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of children a parent with `score` produces.
///
/// `round(baseline + baseline * ((score - mean) / mean) * pressure)`, floored
/// at zero. A parent at the mean gets exactly `baseline` children.
///
/// When `mean` is zero or negative the relative scaling is meaningless, so
/// every parent gets `baseline` children. A non-finite `mean` is an error.
pub fn child_count(score: f64, mean: f64, baseline: usize, pressure: f64) -> Result<usize> {
    if !mean.is_finite() {
        return Err(EvolutionError::DegenerateMeanScore(mean));
    }
    if mean <= 0.0 {
        return Ok(baseline);
    }
    let baseline = baseline as f64;
    let relative = (score - mean) / mean;
    let count = (baseline + baseline * relative * pressure).round();
    Ok(if count > 0.0 { count as usize } else { 0 })
}

/// Picks a mate index uniformly among the `n - 1` indices other than `parent`.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn pick_mate<R: Rng + ?Sized>(parent: usize, n: usize, rng: &mut R) -> usize {
    assert!(n >= 2, "cannot pick a distinct mate from fewer than 2 hands");
    let j = rng.random_range(0..n - 1);
    if j >= parent {
        j + 1
    } else {
        j
    }
}

/// Number of children kept by fitness selection.
///
/// `n - floor((n - population_size) * pressure)`, or all of them when
/// there is no surplus.
pub fn survivor_count(children: usize, population_size: usize, pressure: f64) -> usize {
    if pressure <= 0.0 || children <= population_size {
        return children;
    }
    let surplus = (children - population_size) as f64;
    children - (surplus * pressure).floor() as usize
}

/// Truncation selection on the surplus.
///
/// When there are more children than `population_size` and `pressure` is
/// positive, sorts `children` by descending score and keeps the top
/// [`survivor_count`]. Returns whether selection was applied.
pub fn select_fittest(children: &mut Vec<Hand>, population_size: usize, pressure: f64) -> bool {
    if pressure <= 0.0 || children.len() <= population_size {
        return false;
    }
    let keep = survivor_count(children.len(), population_size, pressure);
    sort_by_score_desc(children);
    children.truncate(keep);
    true
}

/// Random bottleneck: shuffles and truncates to `population_size` when
/// there is a surplus. Returns whether it was applied.
pub fn bottleneck<R: Rng + ?Sized>(
    survivors: &mut Vec<Hand>,
    population_size: usize,
    rng: &mut R,
) -> bool {
    if survivors.len() <= population_size {
        return false;
    }
    survivors.shuffle(rng);
    survivors.truncate(population_size);
    true
}

/// Stable sort, best score first.
pub fn sort_by_score_desc(hands: &mut [Hand]) {
    hands.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
