//! Reference objectives.
//!
//! - [`EquationProblem`]: integer solutions of `3x² + 5y³ = 7a + 3b²` with `a > b`
//! - [`NQueens`]: non-attacking queen placements on an `n × n` board

mod equation;
mod queens;

pub use equation::EquationProblem;
pub use queens::NQueens;
