//! Evolution strategies and tournament genetic algorithm.
//!
//! A generic, problem-agnostic engine over integer gene vectors. Users
//! describe their problem by implementing [`Objective`]; the engine runs one
//! of six strategies against it:
//!
//! | Strategy | Breeding | Mutation | Selection |
//! |---|---|---|---|
//! | (1+1) | copy | additive | (1+1) acceptance |
//! | (μ+λ) | copy of random parent | additive | plus |
//! | (μ,λ) | copy of random parent | additive | comma |
//! | (μ/ρ+λ) | melting / combination | additive | plus |
//! | (μ/ρ,λ) | melting / combination | additive | comma |
//! | GA | wedding crossover | gene replacement | tournament |
//!
//! # Core Types
//!
//! - [`Objective`]: validity predicate, scorer and score polarity
//! - [`Individual`]: gene vector with a cached evaluation
//! - [`Population`]: parents plus a reusable selection buffer
//!
//! # Key Types
//!
//! - [`StrategyConfig`]: strategy parameters, presets and validation
//! - [`Runner`]: executes the generation loop
//! - [`RunResult`]: outcome, best individual, counters and quality trace
//!
//! # Submodules
//!
//! - [`operators`]: one-point crossover, wedding, additive and replacement mutation
//! - [`recombination`]: melting and combination for μ/ρ strategies
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Schwefel (1995), *Evolution and Optimum Seeking*
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
pub mod recombination;
mod runner;
mod selection;
mod types;

pub use config::{
    StrategyConfig, StrategyKind, DEFAULT_ES_MAX_ITERATIONS, DEFAULT_GA_MAX_ITERATIONS,
};
pub use operators::{Breeding, Mutation};
pub use population::Population;
pub use recombination::Recombination;
pub use runner::{Outcome, QualityTrace, RunResult, Runner};
pub use selection::{Selection, SelectionOutcome};
pub use types::{Individual, Objective, Polarity};
