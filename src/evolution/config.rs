//! Strategy configuration.
//!
//! [`StrategyConfig`] is created once per run and never changes while the
//! run executes. [`StrategyConfig::validate`] rejects every parameter
//! combination the runner cannot execute, before any generation starts.

use super::operators::{Breeding, Mutation};
use super::recombination::Recombination;
use super::selection::Selection;
use crate::error::ConfigError;
use crate::random::IntRange;

/// Generation budget of the evolution strategies.
pub const DEFAULT_ES_MAX_ITERATIONS: usize = 500_000;

/// Generation budget of the tournament GA.
pub const DEFAULT_GA_MAX_ITERATIONS: usize = 1_000_000;

/// The six supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// (1+1)-ES: one parent, one mutant.
    OnePlusOne,
    /// (μ+λ)-ES without recombination.
    MuPlusLambda,
    /// (μ,λ)-ES without recombination.
    MuCommaLambda,
    /// (μ/ρ+λ)-ES.
    MuOverRhoPlusLambda,
    /// (μ/ρ,λ)-ES.
    MuOverRhoCommaLambda,
    /// Genetic algorithm with wedding crossover and tournament selection.
    TournamentGa,
}

impl StrategyKind {
    /// Conventional notation, e.g. `(μ/ρ+λ)`.
    pub fn notation(self) -> &'static str {
        match self {
            StrategyKind::OnePlusOne => "(1+1)",
            StrategyKind::MuPlusLambda => "(μ+λ)",
            StrategyKind::MuCommaLambda => "(μ,λ)",
            StrategyKind::MuOverRhoPlusLambda => "(μ/ρ+λ)",
            StrategyKind::MuOverRhoCommaLambda => "(μ/ρ,λ)",
            StrategyKind::TournamentGa => "GA-tournament",
        }
    }

    /// Whether children are produced by μ/ρ recombination.
    pub fn recombines(self) -> bool {
        matches!(
            self,
            StrategyKind::MuOverRhoPlusLambda | StrategyKind::MuOverRhoCommaLambda
        )
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

/// Configuration of one evolutionary run.
///
/// # Defaults
///
/// ```
/// use u_evolution::evolution::{StrategyConfig, StrategyKind};
///
/// let config = StrategyConfig::default();
/// assert_eq!(config.kind, StrategyKind::OnePlusOne);
/// assert_eq!(config.gene_range, (-50, 50));
/// assert_eq!(config.mutation_range, (-5, 5));
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolution::evolution::{Recombination, StrategyConfig};
///
/// let config = StrategyConfig::mu_over_rho_comma_lambda(10, 3, 40, Recombination::Melting)
///     .with_gene_range(-20, 20)
///     .with_mutation_range(-2, 2)
///     .with_max_iterations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyConfig {
    /// Which strategy to run.
    pub kind: StrategyKind,

    /// Parent count μ. For the GA this is the population size.
    pub mu: usize,

    /// Children per generation λ. Unused by the GA, whose offspring count
    /// equals the population size.
    pub lambda: usize,

    /// Parents sampled per recombination ρ (μ/ρ strategies only).
    pub rho: usize,

    /// Recombination operator (μ/ρ strategies only).
    pub recombination: Option<Recombination>,

    /// Inclusive `(min, max)` range for initial and replacement genes.
    pub gene_range: (i64, i64),

    /// Inclusive `(min, max)` range of additive mutation deltas (ES only).
    pub mutation_range: (i64, i64),

    /// Individuals per tournament (GA only).
    pub tournament_size: usize,

    /// Carry the best individual into the next generation (GA only).
    pub elitism: bool,

    /// Per-draw gene replacement probability in `[0, 1)` (GA only).
    pub mutation_probability: f64,

    /// Maximum number of generations before giving up.
    pub max_iterations: usize,

    /// (1+1) only: restart from a random individual when neither parent nor
    /// mutant is usable, instead of keeping the parent.
    pub restart_on_death: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system's entropy source.
    pub seed: Option<u64>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::one_plus_one()
    }
}

impl StrategyConfig {
    fn base(kind: StrategyKind, mu: usize, lambda: usize) -> Self {
        Self {
            kind,
            mu,
            lambda,
            rho: 0,
            recombination: None,
            gene_range: (-50, 50),
            mutation_range: (-5, 5),
            tournament_size: 3,
            elitism: true,
            mutation_probability: 0.5,
            max_iterations: DEFAULT_ES_MAX_ITERATIONS,
            restart_on_death: false,
            seed: None,
        }
    }

    /// (1+1)-ES with gene range `[-50, 50]` and mutation range `[-5, 5]`.
    pub fn one_plus_one() -> Self {
        Self::base(StrategyKind::OnePlusOne, 1, 1)
    }

    /// (μ+λ)-ES.
    pub fn mu_plus_lambda(mu: usize, lambda: usize) -> Self {
        Self::base(StrategyKind::MuPlusLambda, mu, lambda)
    }

    /// (μ,λ)-ES.
    pub fn mu_comma_lambda(mu: usize, lambda: usize) -> Self {
        Self::base(StrategyKind::MuCommaLambda, mu, lambda)
    }

    /// (μ/ρ+λ)-ES.
    pub fn mu_over_rho_plus_lambda(
        mu: usize,
        rho: usize,
        lambda: usize,
        recombination: Recombination,
    ) -> Self {
        Self {
            rho,
            recombination: Some(recombination),
            ..Self::base(StrategyKind::MuOverRhoPlusLambda, mu, lambda)
        }
    }

    /// (μ/ρ,λ)-ES.
    pub fn mu_over_rho_comma_lambda(
        mu: usize,
        rho: usize,
        lambda: usize,
        recombination: Recombination,
    ) -> Self {
        Self {
            rho,
            recombination: Some(recombination),
            ..Self::base(StrategyKind::MuOverRhoCommaLambda, mu, lambda)
        }
    }

    /// Tournament GA: tournament size 3, elitism on, replacement
    /// probability 0.5, one million generations.
    pub fn tournament_ga(population_size: usize, gene_range: IntRange) -> Self {
        Self {
            gene_range: (gene_range.min(), gene_range.max()),
            max_iterations: DEFAULT_GA_MAX_ITERATIONS,
            ..Self::base(StrategyKind::TournamentGa, population_size, population_size)
        }
    }

    /// Sets μ.
    pub fn with_mu(mut self, mu: usize) -> Self {
        self.mu = mu;
        self
    }

    /// Sets λ.
    pub fn with_lambda(mut self, lambda: usize) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets ρ.
    pub fn with_rho(mut self, rho: usize) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the recombination operator.
    pub fn with_recombination(mut self, recombination: Recombination) -> Self {
        self.recombination = Some(recombination);
        self
    }

    /// Sets the gene range.
    pub fn with_gene_range(mut self, min: i64, max: i64) -> Self {
        self.gene_range = (min, max);
        self
    }

    /// Sets the mutation delta range.
    pub fn with_mutation_range(mut self, min: i64, max: i64) -> Self {
        self.mutation_range = (min, max);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the GA replacement probability.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Selects the legacy (1+1) variant that restarts after a death.
    pub fn with_restart_on_death(mut self, restart: bool) -> Self {
        self.restart_on_death = restart;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::non_positive("max_iterations"));
        }
        IntRange::new(self.gene_range.0, self.gene_range.1)?;

        match self.kind {
            StrategyKind::OnePlusOne => {
                if self.mu != 1 || self.lambda != 1 {
                    return Err(ConfigError::NotOnePlusOne {
                        mu: self.mu,
                        lambda: self.lambda,
                    });
                }
                IntRange::new(self.mutation_range.0, self.mutation_range.1)?;
            }
            StrategyKind::MuPlusLambda
            | StrategyKind::MuCommaLambda
            | StrategyKind::MuOverRhoPlusLambda
            | StrategyKind::MuOverRhoCommaLambda => {
                if self.mu == 0 {
                    return Err(ConfigError::non_positive("mu"));
                }
                if self.lambda == 0 {
                    return Err(ConfigError::non_positive("lambda"));
                }
                IntRange::new(self.mutation_range.0, self.mutation_range.1)?;
                if self.kind.recombines() {
                    if self.rho == 0 {
                        return Err(ConfigError::non_positive("rho"));
                    }
                    if self.recombination.is_none() {
                        return Err(ConfigError::MissingRecombination {
                            strategy: self.kind.notation(),
                        });
                    }
                }
            }
            StrategyKind::TournamentGa => {
                if self.mu == 0 {
                    return Err(ConfigError::non_positive("population_size"));
                }
                if self.tournament_size == 0 {
                    return Err(ConfigError::non_positive("tournament_size"));
                }
                // Replacement repeats while draws fall below p, so p = 1 never stops.
                if !(0.0..1.0).contains(&self.mutation_probability) {
                    return Err(ConfigError::InvalidProbability {
                        name: "mutation_probability",
                        value: self.mutation_probability,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validated gene range.
    pub fn gene_int_range(&self) -> Result<IntRange, ConfigError> {
        IntRange::new(self.gene_range.0, self.gene_range.1)
    }

    /// Number of children bred per generation.
    pub fn offspring_count(&self) -> usize {
        match self.kind {
            StrategyKind::OnePlusOne => 1,
            StrategyKind::TournamentGa => self.mu,
            _ => self.lambda,
        }
    }

    /// Builds the breeding, mutation and selection policies of this
    /// strategy. Validates first.
    pub(crate) fn policies(&self) -> Result<(Breeding, Mutation, Selection), ConfigError> {
        self.validate()?;
        let gene_range = self.gene_int_range()?;
        let lambda = self.offspring_count();

        let breeding = match self.kind {
            StrategyKind::TournamentGa => Breeding::Wedding,
            kind if kind.recombines() => Breeding::Recombine {
                kind: self.recombination.ok_or(ConfigError::MissingRecombination {
                    strategy: kind.notation(),
                })?,
                rho: self.rho,
                lambda,
            },
            _ => Breeding::Replicate { lambda },
        };

        let mutation = match self.kind {
            StrategyKind::TournamentGa => Mutation::Replace {
                probability: self.mutation_probability,
                gene_range,
            },
            _ => Mutation::Additive(IntRange::new(self.mutation_range.0, self.mutation_range.1)?),
        };

        let selection = match self.kind {
            StrategyKind::OnePlusOne => Selection::OnePlusOne {
                restart_on_death: self.restart_on_death,
            },
            StrategyKind::MuPlusLambda | StrategyKind::MuOverRhoPlusLambda => Selection::Plus,
            StrategyKind::MuCommaLambda | StrategyKind::MuOverRhoCommaLambda => Selection::Comma,
            StrategyKind::TournamentGa => Selection::Tournament {
                size: self.tournament_size,
                elitism: self.elitism,
            },
        };

        Ok((breeding, mutation, selection))
    }
}
