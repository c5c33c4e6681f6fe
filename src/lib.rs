//! Evolution strategies and a tournament genetic algorithm for
//! integer-coded search problems.
//!
//! Provides one generic generation loop with six strategies:
//!
//! - **(1+1)-ES**: a single parent competes with its mutant.
//! - **(μ+λ)-ES / (μ,λ)-ES**: λ mutated copies of random parents; parents
//!   either compete with the children (plus) or are replaced by them (comma).
//! - **(μ/ρ+λ)-ES / (μ/ρ,λ)-ES**: children recombined from ρ sampled parents
//!   by melting (gene-wise mean) or combination (gene-wise pick).
//! - **Tournament GA**: pairwise one-point crossover, probabilistic gene
//!   replacement and tournament selection with optional elitism.
//!
//! Problems plug in through the [`evolution::Objective`] trait; two
//! reference objectives live in [`problems`].
//!
//! # Architecture
//!
//! - [`random`]: the single seeded engine a run owns, plus range helpers
//! - [`evolution`]: individuals, operators, selection and the runner
//! - [`problems`]: the equation and N-Queens objectives
//! - [`error`]: configuration errors
//!
//! Runs are single-threaded and deterministic for a given seed.

pub mod error;
pub mod evolution;
pub mod problems;
pub mod random;

pub use error::ConfigError;
