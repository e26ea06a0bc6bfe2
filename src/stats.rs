//! Score statistics.
//!
//! [`GenerationStats`] summarizes a set of scores as min, max, mean and
//! population standard deviation. [`ScoreHistogram`] counts hands per
//! integer score for reporting.

use crate::error::{EvolutionError, Result};
use crate::genotype::Hand;
use std::collections::BTreeMap;

/// Arithmetic mean. Needs at least one data point.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(EvolutionError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation around a precomputed `mean`.
///
/// Needs at least two data points.
pub fn population_std_dev(data: &[f64], mean: f64) -> Result<f64> {
    if data.len() < 2 {
        return Err(EvolutionError::InsufficientData {
            required: 2,
            actual: data.len(),
        });
    }
    let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((ss / data.len() as f64).sqrt())
}

/// Summary statistics over a set of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Lowest score.
    pub min: f64,
    /// Highest score.
    pub max: f64,
    /// Mean score.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl GenerationStats {
    /// Computes statistics over raw scores. Needs at least two scores.
    pub fn from_scores(scores: &[f64]) -> Result<Self> {
        let mean = mean(scores)?;
        let std_dev = population_std_dev(scores, mean)?;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            min,
            max,
            mean,
            std_dev,
        })
    }

    /// Computes statistics over the scores of `hands`.
    pub fn from_hands(hands: &[Hand]) -> Result<Self> {
        let scores: Vec<f64> = hands.iter().map(Hand::score).collect();
        Self::from_scores(&scores)
    }
}

impl std::fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "    min:  {}", self.min)?;
        writeln!(f, "    max:  {}", self.max)?;
        writeln!(f, "    mean: {}", self.mean)?;
        write!(f, "    sd:   {}", self.std_dev)
    }
}

/// Number of hands at each integer score.
///
/// Sparse: only scores that occur are stored. Non-integer scores are
/// rounded to the nearest integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreHistogram {
    counts: BTreeMap<i64, usize>,
}

impl ScoreHistogram {
    /// Counts the scores of `hands`.
    pub fn from_hands(hands: &[Hand]) -> Self {
        let mut histogram = Self::default();
        for hand in hands {
            histogram.add(hand.score());
        }
        histogram
    }

    /// Adds one observation.
    pub fn add(&mut self, score: f64) {
        *self.counts.entry(score.round() as i64).or_insert(0) += 1;
    }

    /// Count at `score`.
    pub fn count(&self, score: i64) -> usize {
        self.counts.get(&score).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(score, count)` pairs in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

impl std::fmt::Display for ScoreHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (score, count) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{count}  hands scored {score}")?;
        }
        Ok(())
    }
}
