//! Evolutionary loop execution.
//!
//! [`Runner`] drives every strategy through one loop:
//! initialize → evaluate → check → {breed → mutate → evaluate → check →
//! select} → repeat, until an individual solves the objective or the
//! generation budget runs out.
//!
//! Strategy differences live entirely in the three policies built from the
//! configuration ([`Breeding`], [`Mutation`], [`Selection`]).

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::StrategyConfig;
use super::operators::{Breeding, Mutation};
use super::population::Population;
use super::selection::Selection;
use super::types::{Individual, Objective};
use crate::error::ConfigError;
use crate::random::{create_rng, entropy_rng, IntRange};

/// Generations between periodic progress logs.
const PROGRESS_INTERVAL: usize = 50_000;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// An individual satisfying the objective was found.
    Solved,
    /// The generation budget ran out first. Not an error.
    BudgetExhausted,
}

/// Best score per generation, in order.
///
/// Ends with a `0` sentinel once the run finishes, which is the format the
/// `Iteration;Quality` CSV export expects. (1+1) generations in which parent
/// and mutant were both unusable have no score and record nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityTrace {
    values: Vec<i64>,
}

impl QualityTrace {
    /// Sentinel appended when a run finishes.
    pub const SENTINEL: i64 = 0;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, best_score: i64) {
        self.values.push(best_score);
    }

    fn finish(&mut self) {
        self.values.push(Self::SENTINEL);
        self.values.shrink_to_fit();
    }

    /// All recorded values including the trailing sentinel.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of recorded values including the sentinel.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(iteration, quality)` rows, numbered from zero over recorded values.
    pub fn rows(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.values.iter().copied().enumerate()
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Whether a solution was found.
    pub outcome: Outcome,

    /// The solution if solved, otherwise the best individual seen.
    pub best: Individual,

    /// Generations executed (0 if the initial population already solved it).
    pub iterations: usize,

    /// (1+1) only: generations in which neither parent nor mutant was usable.
    pub deaths: usize,

    /// Best score per generation.
    pub trace: QualityTrace,
}

impl RunResult {
    /// Whether the run found a solution.
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// The solution, or `None` when the budget was exhausted.
    pub fn solution(&self) -> Option<&Individual> {
        self.is_solved().then_some(&self.best)
    }
}

/// Executes an evolutionary run.
///
/// # Usage
///
/// ```
/// use u_evolution::evolution::{Runner, StrategyConfig};
/// use u_evolution::problems::EquationProblem;
///
/// let config = StrategyConfig::one_plus_one()
///     .with_max_iterations(20_000)
///     .with_seed(7);
/// let result = Runner::run(&EquationProblem, &config).unwrap();
/// match result.solution() {
///     Some(s) => assert!(EquationProblem.is_satisfied(s.genes())),
///     None => assert_eq!(result.iterations, 20_000),
/// }
/// ```
pub struct Runner;

impl Runner {
    /// Runs with an engine seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &StrategyConfig,
    ) -> Result<RunResult, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs with a caller-supplied engine. `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        config: &StrategyConfig,
        rng: &mut R,
    ) -> Result<RunResult, ConfigError>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        let (breeding, mutation, selection) = config.policies()?;
        let gene_count = objective.gene_count();
        if gene_count == 0 {
            return Err(ConfigError::EmptyGenome);
        }
        let gene_range = config.gene_int_range()?;

        info!(
            strategy = %config.kind,
            mu = config.mu,
            lambda = config.offspring_count(),
            rho = config.rho,
            max_iterations = config.max_iterations,
            "starting evolution run"
        );

        let run = Run {
            objective,
            breeding,
            mutation,
            selection,
            gene_range,
            gene_count,
            max_iterations: config.max_iterations,
        };
        let result = run.execute(config.mu, config.offspring_count(), rng);

        info!(
            strategy = %config.kind,
            outcome = ?result.outcome,
            iterations = result.iterations,
            deaths = result.deaths,
            best_score = ?result.best.score(),
            "evolution run finished"
        );
        Ok(result)
    }
}

/// One configured run: the objective plus the strategy's policies.
struct Run<'a, O: ?Sized> {
    objective: &'a O,
    breeding: Breeding,
    mutation: Mutation,
    selection: Selection,
    gene_range: IntRange,
    gene_count: usize,
    max_iterations: usize,
}

impl<O: Objective + ?Sized> Run<'_, O> {
    fn execute<R: Rng + ?Sized>(&self, mu: usize, lambda: usize, rng: &mut R) -> RunResult {
        let objective = self.objective;

        // 1. Initialize and evaluate parents
        let mut parents = Population::random(mu, self.gene_count, &self.gene_range, rng);
        parents.evaluate_all(objective);

        let mut trace = QualityTrace::with_capacity(self.max_iterations.min(1 << 16));
        if let Some(solved) = parents.find_solved(objective) {
            return finish(Outcome::Solved, solved.clone(), 0, 0, trace);
        }

        let mut best = parents
            .best(objective)
            .expect("population must not be empty")
            .clone();
        let mut children: Vec<Individual> = Vec::with_capacity(lambda);
        let mut iterations = 0usize;
        let mut deaths = 0usize;

        // 2. Evolutionary loop
        while iterations < self.max_iterations {
            iterations += 1;

            self.breeding.breed(parents.members(), &mut children, rng);
            for child in &mut children {
                self.mutation.mutate(child, rng);
                objective.evaluate(child);
            }

            if let Some(solved) = children.iter().find(|c| objective.is_solved(c)) {
                let solved = solved.clone();
                trace.push(solved.score().unwrap_or(objective.polarity().worst()));
                debug!(iteration = iterations, "solution found");
                return finish(Outcome::Solved, solved, iterations, deaths, trace);
            }

            if let Some(gen_best) = children
                .iter()
                .min_by(|a, b| objective.compare_individuals(a, b))
            {
                if objective.compare_individuals(gen_best, &best).is_lt() {
                    best = gen_best.clone();
                }
            }

            let outcome = self
                .selection
                .select(objective, &mut parents, &mut children, rng);

            if outcome.died {
                deaths += 1;
                trace!(iteration = iterations, deaths, "parent and mutant both unusable");
                if outcome.restart {
                    let fresh = &mut parents.members_mut()[0];
                    *fresh = Individual::random(self.gene_count, &self.gene_range, rng);
                    objective.evaluate(fresh);
                    debug!(iteration = iterations, "restarting from a random individual");
                    if objective.is_solved(fresh) {
                        let solved = fresh.clone();
                        trace.push(solved.score().unwrap_or(objective.polarity().worst()));
                        return finish(Outcome::Solved, solved, iterations, deaths, trace);
                    }
                }
            }

            if !outcome.died {
                trace.push(outcome.best_score);
            }
            objective.on_generation(iterations, outcome.best_score);
            trace!(iteration = iterations, best_score = outcome.best_score);

            if iterations.is_multiple_of(PROGRESS_INTERVAL) {
                debug!(
                    iteration = iterations,
                    best_score = outcome.best_score,
                    overall_best = ?best.score(),
                    "evolution progress"
                );
            }
        }

        info!(
            max_iterations = self.max_iterations,
            "generation budget exhausted without a solution"
        );
        finish(Outcome::BudgetExhausted, best, iterations, deaths, trace)
    }
}

fn finish(
    outcome: Outcome,
    best: Individual,
    iterations: usize,
    deaths: usize,
    mut trace: QualityTrace,
) -> RunResult {
    trace.finish();
    RunResult {
        outcome,
        best,
        iterations,
        deaths,
        trace,
    }
}

// ============================================================================
// Tests
// ============================================================================
