//! Configuration errors.
//!
//! Only rejected configurations are errors. Running out of iterations is a
//! normal [`Outcome`](crate::evolution::Outcome), and broken internal
//! invariants (sampling from an empty pool) panic.

use thiserror::Error;

/// A strategy configuration that cannot be run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A count parameter (μ, λ, ρ, population, tournament size) is zero.
    #[error("{name} must be positive")]
    NonPositive {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
    },

    /// A random range has `min > max`.
    #[error("inverted range: min {min} > max {max}")]
    InvertedRange {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// A μ/ρ strategy was requested without a recombination kind.
    #[error("strategy {strategy} requires a recombination kind (melting or combination)")]
    MissingRecombination {
        /// Strategy notation, e.g. `(μ/ρ+λ)`.
        strategy: &'static str,
    },

    /// The (1+1) strategy was configured with μ or λ other than one.
    #[error("(1+1) requires mu = 1 and lambda = 1, got mu = {mu}, lambda = {lambda}")]
    NotOnePlusOne {
        /// Configured μ.
        mu: usize,
        /// Configured λ.
        lambda: usize,
    },

    /// A probability lies outside `[0, 1)`.
    #[error("{name} must lie in [0, 1), got {value}")]
    InvalidProbability {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The objective reports an empty gene vector.
    #[error("objective must have at least one gene")]
    EmptyGenome,
}

impl ConfigError {
    pub(crate) fn non_positive(name: &'static str) -> Self {
        Self::NonPositive { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::non_positive("mu").to_string(),
            "mu must be positive"
        );
        assert_eq!(
            ConfigError::InvertedRange { min: 5, max: -5 }.to_string(),
            "inverted range: min 5 > max -5"
        );
        assert!(ConfigError::MissingRecombination {
            strategy: "(μ/ρ,λ)"
        }
        .to_string()
        .contains("recombination"));
    }
}
