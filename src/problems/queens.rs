//! N-Queens as a fitness-maximization problem.
//!
//! Gene `i` is the row of the queen in column `i`. Every gene vector is a
//! legal board; the fitness is minus the number of attacking queen pairs, so
//! `0` is a solution and higher is better.

use crate::evolution::{Objective, Polarity};
use crate::random::IntRange;

/// N-Queens objective for an `n × n` board.
///
/// ```
/// use u_evolution::evolution::Objective;
/// use u_evolution::problems::NQueens;
///
/// let queens = NQueens::new(4);
/// assert_eq!(queens.score(&[1, 3, 0, 2]), 0);
/// assert_eq!(queens.score(&[0, 1, 2, 3]), -6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    size: usize,
}

impl NQueens {
    /// Creates the objective for an `size × size` board.
    ///
    /// # Panics
    /// Panics if `size == 0`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self { size }
    }

    /// Board size `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Range of valid row indices, `[0, n - 1]`.
    pub fn gene_range(&self) -> IntRange {
        IntRange::new(0, self.size as i64 - 1).expect("board size is positive")
    }

    /// Number of queen pairs sharing a row or a diagonal.
    pub fn collisions(genes: &[i64]) -> usize {
        let mut count = 0;
        for col in 1..genes.len() {
            for other in 0..col {
                let distance = genes[col].abs_diff(genes[other]);
                if distance == 0 || distance == (col - other) as u64 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether `genes` places `n` queens with no row or diagonal conflicts,
    /// every queen on the board.
    pub fn is_valid_placement(&self, genes: &[i64]) -> bool {
        genes.len() == self.size
            && genes.iter().all(|&row| self.gene_range().contains(row))
            && Self::collisions(genes) == 0
    }

    /// `(column, row)` coordinates of every queen.
    pub fn placements(genes: &[i64]) -> impl Iterator<Item = (usize, i64)> + '_ {
        genes.iter().copied().enumerate()
    }
}

impl Objective for NQueens {
    fn gene_count(&self) -> usize {
        self.size
    }

    fn polarity(&self) -> Polarity {
        Polarity::Maximize
    }

    fn is_valid(&self, _genes: &[i64]) -> bool {
        true
    }

    fn score(&self, genes: &[i64]) -> i64 {
        -(Self::collisions(genes) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::{Individual, Runner, StrategyConfig};
    use std::collections::HashSet;

    #[test]
    fn test_known_solutions() {
        let q = NQueens::new(8);
        let solution = [0, 4, 7, 5, 2, 6, 1, 3];
        assert_eq!(NQueens::collisions(&solution), 0);
        assert!(q.is_valid_placement(&solution));
        assert!(NQueens::new(1).is_valid_placement(&[0]));
    }

    #[test]
    fn test_row_and_diagonal_collisions() {
        assert_eq!(NQueens::collisions(&[0, 0]), 1);
        assert_eq!(NQueens::collisions(&[0, 1]), 1);
        assert_eq!(NQueens::collisions(&[1, 0]), 1);
        assert_eq!(NQueens::collisions(&[0, 2]), 0);
        // Every pair attacks on a shared row.
        assert_eq!(NQueens::collisions(&[3, 3, 3, 3]), 6);
    }

    #[test]
    fn test_fitness_polarity() {
        let q = NQueens::new(4);
        assert_eq!(q.polarity(), Polarity::Maximize);
        assert!(q.score(&[1, 3, 0, 2]) > q.score(&[0, 0, 1, 3]));
        let mut ind = Individual::new(vec![0, 0, 0, 0]);
        assert_eq!(q.evaluate(&mut ind), -6);
        assert!(ind.is_usable());
    }

    #[test]
    fn test_gene_range() {
        let range = NQueens::new(8).gene_range();
        assert_eq!((range.min(), range.max()), (0, 7));
    }

    #[test]
    fn test_placement_rejects_off_board() {
        let q = NQueens::new(4);
        assert!(!q.is_valid_placement(&[1, 3, 0, 6]));
        assert!(!q.is_valid_placement(&[1, 3, 0]));
    }

    #[test]
    fn test_placements() {
        let cells: Vec<(usize, i64)> = NQueens::placements(&[2, 0, 3, 1]).collect();
        assert_eq!(cells, vec![(0, 2), (1, 0), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_ga_solves_eight_queens() {
        let queens = NQueens::new(8);
        let config = StrategyConfig::tournament_ga(8, queens.gene_range())
            .with_tournament_size(3)
            .with_elitism(true)
            .with_seed(42);
        let result = Runner::run(&queens, &config).unwrap();
        let solution = result.solution().expect("8-queens should be solved");
        assert_eq!(solution.score(), Some(0));
        assert!(queens.is_valid_placement(solution.genes()));

        let rows: HashSet<i64> = solution.genes().iter().copied().collect();
        assert_eq!(rows.len(), 8, "no two queens may share a row");
        for i in 0..8 {
            for j in (i + 1)..8 {
                let dr = solution.genes()[i].abs_diff(solution.genes()[j]);
                assert_ne!(dr, (j - i) as u64, "queens {i} and {j} share a diagonal");
            }
        }
    }

    #[test]
    fn test_ga_small_boards() {
        for n in [4, 5, 6] {
            let queens = NQueens::new(n);
            let config = StrategyConfig::tournament_ga(n.max(6), queens.gene_range())
                .with_max_iterations(200_000)
                .with_seed(n as u64);
            let result = Runner::run(&queens, &config).unwrap();
            assert!(result.is_solved(), "{n}-queens unsolved");
            assert!(queens.is_valid_placement(result.best.genes()));
        }
    }

    #[test]
    fn test_ga_is_deterministic() {
        let queens = NQueens::new(6);
        let config = StrategyConfig::tournament_ga(6, queens.gene_range())
            .with_max_iterations(2_000)
            .with_seed(123);
        let a = Runner::run(&queens, &config).unwrap();
        let b = Runner::run(&queens, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_two_and_three_queens_exhaust_budget() {
        for n in [2, 3] {
            let queens = NQueens::new(n);
            let config = StrategyConfig::tournament_ga(4, queens.gene_range())
                .with_max_iterations(500)
                .with_seed(1);
            let result = Runner::run(&queens, &config).unwrap();
            assert!(!result.is_solved());
            assert_eq!(result.iterations, 500);
            assert!(result.best.score().unwrap() < 0);
        }
    }
}
