//! Variation operators on integer gene vectors.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: swap the prefix `[0, p)` of two genomes in place
//! - [`wedding`]: pairwise one-point crossover of adjacent population slots
//!
//! # Mutation Operators
//!
//! - [`additive_mutation`]: add one delta draw to every gene (evolution strategies)
//! - [`replace_mutation`]: probability-gated gene replacement, repeated until
//!   a draw fails (genetic algorithm)
//!
//! # Policies
//!
//! [`Breeding`] and [`Mutation`] bundle the operators into the per-strategy
//! policy objects the runner dispatches on.
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use rand::Rng;

use super::recombination::Recombination;
use super::types::Individual;
use crate::random::{index, next_real, IntRange};

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover with a crossover point drawn from `[0, len - 1]`.
///
/// Swaps the genes before the point between the two parents in place and
/// clears both cached evaluations. Returns the crossover point.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn one_point_crossover<R: Rng + ?Sized>(
    a: &mut Individual,
    b: &mut Individual,
    rng: &mut R,
) -> usize {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let point = index(rng, a.len());
    one_point_crossover_at(a, b, point);
    point
}

/// One-point crossover at a fixed point: swaps genes `[0, point)`.
pub fn one_point_crossover_at(a: &mut Individual, b: &mut Individual, point: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(point <= a.len(), "crossover point {point} out of bounds");
    a.genes_mut()[..point].swap_with_slice(&mut b.genes_mut()[..point]);
}

/// Pairs slots `(0, 1)`, `(2, 3)`, ... and crosses each pair over.
///
/// With an odd number of individuals the last one stays unpaired.
pub fn wedding<R: Rng + ?Sized>(individuals: &mut [Individual], rng: &mut R) {
    for pair in individuals.chunks_exact_mut(2) {
        let (left, right) = pair.split_at_mut(1);
        one_point_crossover(&mut left[0], &mut right[0], rng);
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Adds an independent draw from `delta` to every gene.
pub fn additive_mutation<R: Rng + ?Sized>(
    individual: &mut Individual,
    delta: &IntRange,
    rng: &mut R,
) {
    for gene in individual.genes_mut() {
        *gene = gene.saturating_add(delta.sample(rng));
    }
}

/// Probability-gated gene replacement.
///
/// Draws `u ∈ [0, 1]`; while `u < probability`, a uniformly chosen gene is
/// replaced by a fresh value from `gene_range` and `u` is redrawn. Zero,
/// one, or many genes may change. The cached evaluation is only cleared when
/// at least one replacement happened.
///
/// Returns the number of replacements.
///
/// # Panics
/// Panics if the individual has no genes and the first draw succeeds.
pub fn replace_mutation<R: Rng + ?Sized>(
    individual: &mut Individual,
    probability: f64,
    gene_range: &IntRange,
    rng: &mut R,
) -> usize {
    let mut replaced = 0;
    while next_real(rng, 0.0, 1.0) < probability {
        let idx = index(rng, individual.len());
        let value = gene_range.sample(rng);
        individual.genes_mut()[idx] = value;
        replaced += 1;
    }
    replaced
}

// ============================================================================
// Policies
// ============================================================================

/// How a generation's offspring are produced from its parents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Breeding {
    /// Each of `lambda` children is a copy of one uniformly sampled parent.
    Replicate {
        /// Number of children.
        lambda: usize,
    },

    /// Each of `lambda` children is recombined from `rho` sampled parents.
    Recombine {
        /// Recombination operator.
        kind: Recombination,
        /// Parents sampled per child.
        rho: usize,
        /// Number of children.
        lambda: usize,
    },

    /// The whole population is copied and crossed over pairwise.
    Wedding,
}

impl Breeding {
    /// Fills `children` with the offspring of `parents`.
    ///
    /// # Panics
    /// Panics if `parents` is empty.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        parents: &[Individual],
        children: &mut Vec<Individual>,
        rng: &mut R,
    ) {
        assert!(!parents.is_empty(), "cannot breed from an empty parent pool");
        children.clear();
        match *self {
            Breeding::Replicate { lambda } => {
                for _ in 0..lambda {
                    children.push(parents[index(rng, parents.len())].clone());
                }
            }
            Breeding::Recombine { kind, rho, lambda } => {
                for _ in 0..lambda {
                    children.push(kind.recombine(parents, rho, rng));
                }
            }
            Breeding::Wedding => {
                children.extend_from_slice(parents);
                wedding(children, rng);
            }
        }
    }
}

/// How each child is perturbed after breeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    /// [`additive_mutation`] with the given delta range.
    Additive(IntRange),

    /// [`replace_mutation`] with the given probability and gene range.
    Replace {
        /// Per-draw replacement probability.
        probability: f64,
        /// Range fresh gene values are drawn from.
        gene_range: IntRange,
    },
}

impl Mutation {
    /// Applies the mutation to one individual.
    pub fn mutate<R: Rng + ?Sized>(&self, individual: &mut Individual, rng: &mut R) {
        match self {
            Mutation::Additive(delta) => additive_mutation(individual, delta, rng),
            Mutation::Replace {
                probability,
                gene_range,
            } => {
                replace_mutation(individual, *probability, gene_range, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn ind(genes: &[i64]) -> Individual {
        Individual::new(genes.to_vec())
    }

    #[test]
    fn test_crossover_at_swaps_prefix() {
        let mut a = ind(&[1, 2, 3, 4]);
        let mut b = ind(&[5, 6, 7, 8]);
        one_point_crossover_at(&mut a, &mut b, 2);
        assert_eq!(a.genes(), &[5, 6, 3, 4]);
        assert_eq!(b.genes(), &[1, 2, 7, 8]);
    }

    #[test]
    fn test_crossover_at_zero_keeps_genes_but_invalidates() {
        let mut a = ind(&[1, 2]);
        let mut b = ind(&[3, 4]);
        a.set_evaluation(true, 0);
        b.set_evaluation(true, -1);
        one_point_crossover_at(&mut a, &mut b, 0);
        assert_eq!(a.genes(), &[1, 2]);
        assert!(!a.is_evaluated());
        assert!(!b.is_evaluated());
    }

    #[test]
    fn test_random_crossover_point_in_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let mut a = ind(&[0; 8]);
            let mut b = ind(&[1; 8]);
            let p = one_point_crossover(&mut a, &mut b, &mut rng);
            assert!(p < 8);
            assert_eq!(a.genes().iter().filter(|&&g| g == 1).count(), p);
        }
    }

    #[test]
    fn test_crossover_preserves_gene_multiset() {
        let mut rng = create_rng(3);
        let mut a = ind(&[1, 2, 3, 4, 5]);
        let mut b = ind(&[6, 7, 8, 9, 10]);
        one_point_crossover(&mut a, &mut b, &mut rng);
        for i in 0..5 {
            let mut column = [a.genes()[i], b.genes()[i]];
            column.sort_unstable();
            assert_eq!(column, [i as i64 + 1, i as i64 + 6]);
        }
    }

    #[test]
    fn test_wedding_odd_population_leaves_last() {
        let mut rng = create_rng(7);
        let mut pop = vec![ind(&[0; 4]), ind(&[1; 4]), ind(&[2; 4])];
        pop[2].set_evaluation(true, 0);
        wedding(&mut pop, &mut rng);
        assert_eq!(pop[2].genes(), &[2; 4]);
        assert!(pop[2].is_evaluated());
        assert!(pop[0].genes().iter().all(|&g| g == 0 || g == 1));
    }

    #[test]
    fn test_additive_mutation_within_delta() {
        let mut rng = create_rng(42);
        let delta = IntRange::new(-5, 5).unwrap();
        let mut x = ind(&[10, 20, 30, 40]);
        x.set_evaluation(true, 3);
        additive_mutation(&mut x, &delta, &mut rng);
        assert!(!x.is_evaluated());
        for (g, base) in x.genes().iter().zip([10, 20, 30, 40]) {
            assert!((g - base).abs() <= 5);
        }
    }

    #[test]
    fn test_replace_mutation_zero_probability_is_noop() {
        let mut rng = create_rng(1);
        let range = IntRange::new(0, 7).unwrap();
        let mut x = ind(&[3, 3, 3]);
        x.set_evaluation(true, -2);
        assert_eq!(replace_mutation(&mut x, 0.0, &range, &mut rng), 0);
        assert_eq!(x.score(), Some(-2));
    }

    #[test]
    fn test_replace_mutation_values_from_range() {
        let mut rng = create_rng(5);
        let range = IntRange::new(100, 107).unwrap();
        let mut total = 0;
        for _ in 0..200 {
            let mut x = ind(&[0; 8]);
            let n = replace_mutation(&mut x, 0.5, &range, &mut rng);
            total += n;
            if n > 0 {
                assert!(!x.is_evaluated());
            }
            assert!(x.genes().iter().all(|&g| g == 0 || range.contains(g)));
        }
        // Geometric with p = 0.5: about one replacement per call on average.
        assert!(total > 100 && total < 400, "unexpected replacement count {total}");
    }

    #[test]
    fn test_breed_replicate_copies_parents() {
        let mut rng = create_rng(42);
        let parents = vec![ind(&[1, 1]), ind(&[2, 2])];
        let mut children = Vec::new();
        Breeding::Replicate { lambda: 5 }.breed(&parents, &mut children, &mut rng);
        assert_eq!(children.len(), 5);
        assert!(children.iter().all(|c| parents.contains(c)));
    }

    #[test]
    fn test_breed_recombine_count() {
        let mut rng = create_rng(42);
        let parents = vec![ind(&[1, 1]), ind(&[3, 3])];
        let mut children = vec![ind(&[9, 9])];
        Breeding::Recombine {
            kind: Recombination::Melting,
            rho: 2,
            lambda: 4,
        }
        .breed(&parents, &mut children, &mut rng);
        assert_eq!(children.len(), 4);
        assert!(children
            .iter()
            .all(|c| c.genes().iter().all(|&g| (1..=3).contains(&g))));
    }

    #[test]
    fn test_breed_wedding_keeps_size() {
        let mut rng = create_rng(42);
        let parents = vec![ind(&[0; 3]), ind(&[1; 3]), ind(&[2; 3]), ind(&[3; 3])];
        let mut children = Vec::new();
        Breeding::Wedding.breed(&parents, &mut children, &mut rng);
        assert_eq!(children.len(), 4);
        assert_eq!(parents[0].genes(), &[0; 3]);
    }

    #[test]
    #[should_panic(expected = "empty parent pool")]
    fn test_breed_empty_parents_panics() {
        let mut rng = create_rng(1);
        let mut children = Vec::new();
        Breeding::Replicate { lambda: 1 }.breed(&[], &mut children, &mut rng);
    }
}
