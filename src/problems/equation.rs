//! Integer solutions of `3x² + 5y³ = 7a + 3b²` subject to `a > b`.
//!
//! Genes are `[x, y, a, b]`. The score is the absolute difference of the two
//! sides (lower is better, `0` solves the equation); `a > b` is the validity
//! constraint.

use crate::evolution::{Objective, Polarity};

/// Largest score a usable individual can receive.
///
/// Kept strictly below [`Polarity::worst`] so a valid genome never ties with
/// an invalid one, however far from the solution it is.
const MAX_VALID_SCORE: i64 = i64::MAX - 1;

/// The four-variable equation objective.
///
/// ```
/// use u_evolution::evolution::Objective;
/// use u_evolution::problems::EquationProblem;
///
/// // 3·2² + 5·0³ = 12 = 7·0 + 3·(-2)²  and  0 > -2
/// assert!(EquationProblem.is_satisfied(&[2, 0, 0, -2]));
/// assert_eq!(EquationProblem.score(&[2, 0, 0, -2]), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquationProblem;

impl EquationProblem {
    /// Left (`3x² + 5y³`) and right (`7a + 3b²`) side for `[x, y, a, b]`.
    ///
    /// Computed in `i128` with saturation.
    pub fn sides(&self, genes: &[i64]) -> (i128, i128) {
        let [x, y, a, b] = unpack(genes);
        let left = 3i128
            .saturating_mul(x.saturating_pow(2))
            .saturating_add(5i128.saturating_mul(y.saturating_pow(3)));
        let right = 7i128
            .saturating_mul(a)
            .saturating_add(3i128.saturating_mul(b.saturating_pow(2)));
        (left, right)
    }

    /// Whether `[x, y, a, b]` satisfies both the equation and `a > b`.
    pub fn is_satisfied(&self, genes: &[i64]) -> bool {
        self.is_valid(genes) && {
            let (left, right) = self.sides(genes);
            left == right
        }
    }
}

impl Objective for EquationProblem {
    fn gene_count(&self) -> usize {
        4
    }

    fn polarity(&self) -> Polarity {
        Polarity::Minimize
    }

    fn is_valid(&self, genes: &[i64]) -> bool {
        genes[2] > genes[3]
    }

    fn score(&self, genes: &[i64]) -> i64 {
        let (left, right) = self.sides(genes);
        let diff = left.saturating_sub(right).saturating_abs();
        i64::try_from(diff).map_or(MAX_VALID_SCORE, |d| d.min(MAX_VALID_SCORE))
    }
}

fn unpack(genes: &[i64]) -> [i128; 4] {
    assert_eq!(genes.len(), 4, "equation genomes have exactly four genes");
    [
        i128::from(genes[0]),
        i128::from(genes[1]),
        i128::from(genes[2]),
        i128::from(genes[3]),
    ]
}
