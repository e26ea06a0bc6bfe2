//! Error types shared by every module of the crate.

use thiserror::Error;

/// Errors raised while configuring or running an evolution.
///
/// None of these are retried internally: they all point at a configuration
/// or programming mistake that the caller has to fix before rerunning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolutionError {
    /// A configuration parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A statistic was requested over too few data points.
    #[error("insufficient data: {required} data points required, got {actual}")]
    InsufficientData {
        /// Minimum number of data points for the statistic.
        required: usize,
        /// Number of data points supplied.
        actual: usize,
    },

    /// The population mean score cannot be used to scale child counts.
    #[error("degenerate population mean score: {0}")]
    DegenerateMeanScore(f64),

    /// A card identifier or card name could not be interpreted.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// A chromosome is not a permutation of the deck.
    #[error("invalid genotype: {0}")]
    InvalidGenotype(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolutionError>;
