//! Recombination for the (μ/ρ#λ) evolution strategies.
//!
//! Both operators sample parents with replacement from the current μ
//! parents, but they sample differently:
//!
//! - **Combination** draws one ρ-sample per child and, for every gene index,
//!   copies the gene of a randomly chosen member of that sample.
//! - **Melting** draws a fresh ρ-sample for every gene index and takes the
//!   integer mean of the sampled genes (truncated toward zero).
//!
//! The asymmetry is intentional: it changes the statistics of each operator,
//! so the two are not expressed through a shared sampling routine.

use rand::Rng;

use super::types::Individual;
use crate::random::index;

/// Recombination operator for μ/ρ strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recombination {
    /// Gene-wise mean over ρ parents sampled independently per gene.
    Melting,
    /// Gene-wise random pick from one ρ-sample of parents.
    Combination,
}

impl Recombination {
    /// Produces one child from `parents`.
    ///
    /// # Panics
    /// Panics if `parents` is empty or `rho == 0`.
    pub fn recombine<R: Rng + ?Sized>(
        &self,
        parents: &[Individual],
        rho: usize,
        rng: &mut R,
    ) -> Individual {
        match self {
            Recombination::Melting => melting(parents, rho, rng),
            Recombination::Combination => combination(parents, rho, rng),
        }
    }
}

/// Melting recombination.
///
/// # Panics
/// Panics if `parents` is empty or `rho == 0`.
pub fn melting<R: Rng + ?Sized>(parents: &[Individual], rho: usize, rng: &mut R) -> Individual {
    assert!(rho > 0, "rho must be at least 1");
    let gene_count = gene_count(parents);

    let genes = (0..gene_count)
        .map(|gene| {
            let sum: i128 = (0..rho)
                .map(|_| i128::from(parents[index(rng, parents.len())].genes()[gene]))
                .sum();
            // The mean lies between the sampled extremes, so it fits in i64.
            (sum / rho as i128) as i64
        })
        .collect();

    Individual::new(genes)
}

/// Combination recombination.
///
/// # Panics
/// Panics if `parents` is empty or `rho == 0`.
pub fn combination<R: Rng + ?Sized>(
    parents: &[Individual],
    rho: usize,
    rng: &mut R,
) -> Individual {
    assert!(rho > 0, "rho must be at least 1");
    let gene_count = gene_count(parents);

    let sample: Vec<usize> = (0..rho).map(|_| index(rng, parents.len())).collect();
    let genes = (0..gene_count)
        .map(|gene| parents[sample[index(rng, rho)]].genes()[gene])
        .collect();

    Individual::new(genes)
}

fn gene_count(parents: &[Individual]) -> usize {
    assert!(!parents.is_empty(), "cannot recombine an empty parent pool");
    let n = parents[0].len();
    debug_assert!(
        parents.iter().all(|p| p.len() == n),
        "parents must have equal length"
    );
    n
}
