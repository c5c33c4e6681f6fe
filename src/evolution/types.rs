//! Core type definitions for the evolution engine.
//!
//! [`Individual`] is the integer gene vector with its cached evaluation.
//! [`Objective`] is the contract between the generic engine and a concrete
//! problem: it says which genomes are usable, how good they are, and in
//! which direction "better" points.

use rand::Rng;
use std::cmp::Ordering;

use crate::random::IntRange;

/// Direction in which scores improve.
///
/// The engine never compares raw scores itself; it always goes through
/// [`Polarity::compare`] so the same selection code serves distance-style
/// scores (lower is better) and collision penalties (higher is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Lower scores are better.
    Minimize,
    /// Higher scores are better.
    Maximize,
}

impl Polarity {
    /// The score that loses every comparison.
    ///
    /// Assigned to individuals that violate the validity constraint.
    pub fn worst(self) -> i64 {
        match self {
            Polarity::Minimize => i64::MAX,
            Polarity::Maximize => i64::MIN,
        }
    }

    /// Best-first ordering: `Less` means `a` is better than `b`.
    pub fn compare(self, a: i64, b: i64) -> Ordering {
        match self {
            Polarity::Minimize => a.cmp(&b),
            Polarity::Maximize => b.cmp(&a),
        }
    }

    /// Whether `a` is strictly better than `b`.
    pub fn better(self, a: i64, b: i64) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// A candidate solution: gene vector plus cached evaluation.
///
/// The score is `None` until [`Objective::evaluate`] runs, and every
/// mutable access to the genes resets it, so a stale score can never be
/// reused after mutation or recombination.
///
/// `Clone` deep-copies the genes and the cached fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<i64>,
    usable: bool,
    score: Option<i64>,
}

impl Individual {
    /// Creates an unevaluated individual from a gene vector.
    pub fn new(genes: Vec<i64>) -> Self {
        Self {
            genes,
            usable: false,
            score: None,
        }
    }

    /// Creates an individual with `len` genes drawn uniformly from `range`.
    pub fn random<R: Rng + ?Sized>(len: usize, range: &IntRange, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| range.sample(rng)).collect())
    }

    /// The gene vector.
    pub fn genes(&self) -> &[i64] {
        &self.genes
    }

    /// Mutable access to the genes. Clears the cached evaluation.
    pub fn genes_mut(&mut self) -> &mut [i64] {
        self.invalidate();
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the gene vector is empty.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether the last evaluation found the hard constraint satisfied.
    ///
    /// Always `false` for an unevaluated individual.
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Cached score, `None` if not evaluated since the last change.
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Whether a cached score is present.
    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }

    /// Drops the cached evaluation.
    pub fn invalidate(&mut self) {
        self.usable = false;
        self.score = None;
    }

    /// Stores an evaluation result.
    pub fn set_evaluation(&mut self, usable: bool, score: i64) {
        self.usable = usable;
        self.score = Some(score);
    }
}

/// Defines an optimization problem over integer gene vectors.
///
/// Users implement the validity predicate and the scorer; the engine
/// handles initialization, variation, selection and termination.
///
/// # Implementing
///
/// ```
/// use u_evolution::evolution::{Objective, Polarity};
///
/// /// Find x with x^2 == 49.
/// struct Square;
///
/// impl Objective for Square {
///     fn gene_count(&self) -> usize { 1 }
///     fn polarity(&self) -> Polarity { Polarity::Minimize }
///     fn is_valid(&self, genes: &[i64]) -> bool { genes[0] >= 0 }
///     fn score(&self, genes: &[i64]) -> i64 { (genes[0] * genes[0] - 49).abs() }
/// }
/// ```
///
/// A run borrows the objective immutably for its whole duration and calls it
/// from the caller's thread only.
pub trait Objective {
    /// Length of every gene vector for this problem.
    fn gene_count(&self) -> usize;

    /// Direction in which scores improve.
    fn polarity(&self) -> Polarity;

    /// Hard constraint. Individuals failing it are scored as
    /// [`Polarity::worst`] and can only win when every competitor fails too.
    fn is_valid(&self, genes: &[i64]) -> bool;

    /// Scores a valid gene vector. Must be a pure function of `genes`.
    fn score(&self, genes: &[i64]) -> i64;

    /// Whether an evaluated individual solves the problem.
    ///
    /// The default treats a usable individual with score `0` as solved.
    fn is_solved(&self, individual: &Individual) -> bool {
        individual.is_usable() && individual.score() == Some(0)
    }

    /// Evaluates an individual, reusing its cached score when present.
    fn evaluate(&self, individual: &mut Individual) -> i64 {
        if let Some(score) = individual.score() {
            return score;
        }
        let usable = self.is_valid(individual.genes());
        let score = if usable {
            self.score(individual.genes())
        } else {
            self.polarity().worst()
        };
        individual.set_evaluation(usable, score);
        score
    }

    /// Best-first ordering of two scores.
    fn compare(&self, a: i64, b: i64) -> Ordering {
        self.polarity().compare(a, b)
    }

    /// Best-first ordering of two individuals; unevaluated ones rank worst.
    fn compare_individuals(&self, a: &Individual, b: &Individual) -> Ordering {
        let worst = self.polarity().worst();
        self.compare(a.score().unwrap_or(worst), b.score().unwrap_or(worst))
    }

    /// Called once per generation with the best score of that generation.
    ///
    /// A (1+1) generation in which parent and mutant were both unusable
    /// reports [`Polarity::worst`]. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_score: i64) {}
}
