//! Parent population with a reusable selection buffer.
//!
//! Selection writes the next generation into the scratch buffer and then
//! exchanges the two vectors, so no generation pays for a fresh allocation
//! once the buffers have grown to their working size.

use rand::Rng;

use super::types::{Individual, Objective};
use crate::random::IntRange;

/// The current generation's parents.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Individual>,
    scratch: Vec<Individual>,
}

impl Population {
    /// Wraps an existing set of individuals.
    pub fn from_members(members: Vec<Individual>) -> Self {
        let scratch = Vec::with_capacity(members.len());
        Self { members, scratch }
    }

    /// Creates `size` random individuals of `gene_count` genes each.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        gene_count: usize,
        gene_range: &IntRange,
        rng: &mut R,
    ) -> Self {
        let members = (0..size)
            .map(|_| Individual::random(gene_count, gene_range, rng))
            .collect();
        Self::from_members(members)
    }

    /// The members of this generation.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Mutable access to the members.
    pub fn members_mut(&mut self) -> &mut [Individual] {
        &mut self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Evaluates every member whose cached score is stale.
    pub fn evaluate_all<O: Objective + ?Sized>(&mut self, objective: &O) {
        for ind in &mut self.members {
            objective.evaluate(ind);
        }
    }

    /// The best member; the first one wins among equals.
    ///
    /// The borrow ends before the population can be mutated again, so the
    /// result never outlives the generation it was taken from.
    pub fn best<O: Objective + ?Sized>(&self, objective: &O) -> Option<&Individual> {
        self.members
            .iter()
            .min_by(|a, b| objective.compare_individuals(a, b))
    }

    /// The first member that solves the problem, if any.
    pub fn find_solved<O: Objective + ?Sized>(&self, objective: &O) -> Option<&Individual> {
        self.members.iter().find(|ind| objective.is_solved(ind))
    }

    /// Consumes the population, returning its members.
    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }

    /// Both buffers: `(members, scratch)`. The scratch buffer is cleared.
    pub(crate) fn buffers_mut(&mut self) -> (&mut Vec<Individual>, &mut Vec<Individual>) {
        self.scratch.clear();
        (&mut self.members, &mut self.scratch)
    }

    /// Promotes the scratch buffer to be the new generation.
    pub(crate) fn swap_in_scratch(&mut self) {
        std::mem::swap(&mut self.members, &mut self.scratch);
        self.scratch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::Polarity;
    use crate::random::create_rng;

    struct Distance;

    impl Objective for Distance {
        fn gene_count(&self) -> usize {
            1
        }
        fn polarity(&self) -> Polarity {
            Polarity::Minimize
        }
        fn is_valid(&self, genes: &[i64]) -> bool {
            genes[0] != 99
        }
        fn score(&self, genes: &[i64]) -> i64 {
            genes[0].abs()
        }
    }

    fn population(values: &[i64]) -> Population {
        Population::from_members(values.iter().map(|&v| Individual::new(vec![v])).collect())
    }

    #[test]
    fn test_random_population_shape() {
        let range = IntRange::new(0, 9).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::random(6, 3, &range, &mut rng);
        assert_eq!(pop.len(), 6);
        assert!(pop.members().iter().all(|m| m.len() == 3));
    }

    #[test]
    fn test_best_and_solved() {
        let mut pop = population(&[5, -2, 0, 0, 99]);
        pop.evaluate_all(&Distance);
        let best = pop.best(&Distance).unwrap();
        assert_eq!(best.genes(), &[0]);
        assert!(pop.find_solved(&Distance).is_some());
    }

    #[test]
    fn test_invalid_never_best_when_valid_exists() {
        let mut pop = population(&[99, 40]);
        pop.evaluate_all(&Distance);
        assert_eq!(pop.best(&Distance).unwrap().genes(), &[40]);
    }

    #[test]
    fn test_swap_in_scratch() {
        let mut pop = population(&[1, 2]);
        {
            let (members, scratch) = pop.buffers_mut();
            scratch.extend(members.iter().rev().cloned());
        }
        pop.swap_in_scratch();
        let genes: Vec<i64> = pop.members().iter().map(|m| m.genes()[0]).collect();
        assert_eq!(genes, vec![2, 1]);
    }

    #[test]
    fn test_empty_population_has_no_best() {
        let pop = Population::default();
        assert!(pop.is_empty());
        assert!(pop.best(&Distance).is_none());
    }
}
