//! Survivor selection.
//!
//! Every discipline ranks through [`Objective::compare_individuals`], so the
//! same code serves lower-is-better and higher-is-better objectives.
//! Invalid individuals carry the worst score and only survive when nothing
//! better is available.
//!
//! Ties in plus- and comma-selection are broken by shuffling the pool before
//! a stable sort: equal members end up in random order, and the order is
//! reproducible for a given seed.
//!
//! # References
//!
//! - Schwefel (1995), *Evolution and Optimum Seeking*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::population::Population;
use super::types::{Individual, Objective};
use crate::random::{index, shuffle};

/// Survivor selection discipline.
///
/// # Examples
///
/// ```
/// use u_evolution::evolution::Selection;
///
/// // Parents compete with their children.
/// let sel = Selection::Plus;
///
/// // GA tournament of three with the best individual carried over.
/// let sel = Selection::Tournament { size: 3, elitism: true };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// (1+1) acceptance between one parent and one mutant.
    ///
    /// A usable candidate beats an unusable one; between two usable ones the
    /// mutant replaces the parent only if strictly better. When neither is
    /// usable the generation counts as a death; with `restart_on_death` the
    /// runner replaces the parent by a fresh random individual.
    OnePlusOne {
        /// Restart from a random individual after a death.
        restart_on_death: bool,
    },

    /// The best μ of parents ∪ children survive.
    Plus,

    /// The best children survive, reused cyclically to refill μ slots.
    Comma,

    /// Each slot is won by the best of `size` uniformly sampled children.
    Tournament {
        /// Individuals per tournament.
        size: usize,
        /// Reserve one slot for the best individual seen this generation.
        elitism: bool,
    },
}

/// What one selection pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Best score among the competitors of this generation.
    pub best_score: i64,
    /// Neither the (1+1) parent nor its mutant was usable.
    pub died: bool,
    /// The runner must replace the single parent by a fresh individual.
    pub restart: bool,
}

impl SelectionOutcome {
    fn scored(best_score: i64) -> Self {
        Self {
            best_score,
            died: false,
            restart: false,
        }
    }
}

impl Selection {
    /// Replaces `parents` with the next generation.
    ///
    /// `children` must be evaluated; they may be reordered or drained.
    ///
    /// # Panics
    /// Panics if `parents` or `children` is empty.
    pub fn select<O, R>(
        &self,
        objective: &O,
        parents: &mut Population,
        children: &mut Vec<Individual>,
        rng: &mut R,
    ) -> SelectionOutcome
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        assert!(!parents.is_empty(), "cannot select into an empty population");
        assert!(!children.is_empty(), "cannot select from an empty offspring pool");

        match *self {
            Selection::OnePlusOne { restart_on_death } => {
                one_plus_one(objective, parents, children, restart_on_death)
            }
            Selection::Plus => {
                SelectionOutcome::scored(plus_selection(objective, parents, children, rng))
            }
            Selection::Comma => {
                SelectionOutcome::scored(comma_selection(objective, parents, children, rng))
            }
            Selection::Tournament { size, elitism } => SelectionOutcome::scored(
                tournament_selection(objective, parents, children, size, elitism, rng),
            ),
        }
    }
}

/// (1+1) acceptance of `children[0]` against `parents[0]`.
fn one_plus_one<O: Objective + ?Sized>(
    objective: &O,
    parents: &mut Population,
    children: &mut [Individual],
    restart_on_death: bool,
) -> SelectionOutcome {
    let mutant = &mut children[0];
    objective.evaluate(mutant);
    let parent = &mut parents.members_mut()[0];
    objective.evaluate(parent);

    let replace = match (parent.is_usable(), mutant.is_usable()) {
        (false, false) => {
            return SelectionOutcome {
                best_score: objective.polarity().worst(),
                died: true,
                restart: restart_on_death,
            };
        }
        (true, false) => false,
        (false, true) => true,
        (true, true) => objective.compare_individuals(mutant, parent).is_lt(),
    };

    if replace {
        std::mem::swap(parent, mutant);
    }
    SelectionOutcome::scored(parent.score().unwrap_or(objective.polarity().worst()))
}

/// Plus-selection: the best μ of parents ∪ children.
///
/// Returns the best score of the merged pool.
pub fn plus_selection<O, R>(
    objective: &O,
    parents: &mut Population,
    children: &mut Vec<Individual>,
    rng: &mut R,
) -> i64
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let mu = parents.len();
    let (members, pool) = parents.buffers_mut();
    pool.append(members);
    pool.append(children);

    rank(objective, pool, rng);
    let best = pool[0].score().unwrap_or(objective.polarity().worst());
    pool.truncate(mu);

    parents.swap_in_scratch();
    best
}

/// Comma-selection: only children survive.
///
/// The ranked children are copied cyclically (`children[i % λ]`) into the μ
/// parent slots: with λ < μ children are reused, with λ > μ only the best μ
/// are kept. Returns the best child score.
pub fn comma_selection<O, R>(
    objective: &O,
    parents: &mut Population,
    children: &mut [Individual],
    rng: &mut R,
) -> i64
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let mu = parents.len();
    let lambda = children.len();
    rank(objective, children, rng);
    let best = children[0].score().unwrap_or(objective.polarity().worst());

    let (_, next) = parents.buffers_mut();
    next.extend((0..mu).map(|i| children[i % lambda].clone()));

    parents.swap_in_scratch();
    best
}

/// Tournament selection over `children`, refilling the whole population.
///
/// With `elitism`, the last slot receives an unmodified copy of the best of
/// the previous parents and the children, so the best score never regresses.
/// Returns the best score seen this generation.
pub fn tournament_selection<O, R>(
    objective: &O,
    parents: &mut Population,
    children: &[Individual],
    size: usize,
    elitism: bool,
    rng: &mut R,
) -> i64
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let slots = children.len();
    let elite = best_of(objective, parents.members().iter().chain(children.iter()));
    let elite_score = elite.score().unwrap_or(objective.polarity().worst());
    let elite = elitism.then(|| elite.clone());

    let tournaments = if elite.is_some() { slots - 1 } else { slots };
    let (_, next) = parents.buffers_mut();
    for _ in 0..tournaments {
        let winner = tournament(objective, children, size, rng);
        next.push(children[winner].clone());
    }
    next.extend(elite);

    parents.swap_in_scratch();

    if elitism {
        elite_score
    } else {
        let best_child = best_of(objective, children.iter());
        best_child.score().unwrap_or(objective.polarity().worst())
    }
}

/// Picks `size` individuals uniformly with replacement and returns the index
/// of the best. The earliest sampled wins ties.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn tournament<O, R>(objective: &O, pool: &[Individual], size: usize, rng: &mut R) -> usize
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let size = size.max(1);
    let mut best = index(rng, pool.len());
    for _ in 1..size {
        let challenger = index(rng, pool.len());
        if objective
            .compare_individuals(&pool[challenger], &pool[best])
            .is_lt()
        {
            best = challenger;
        }
    }
    best
}

/// Evaluates, shuffles, then stable-sorts best-first.
fn rank<O, R>(objective: &O, pool: &mut [Individual], rng: &mut R)
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    for ind in pool.iter_mut() {
        objective.evaluate(ind);
    }
    shuffle(pool, rng);
    pool.sort_by(|a, b| objective.compare_individuals(a, b));
}

fn best_of<'a, O, I>(objective: &O, individuals: I) -> &'a Individual
where
    O: Objective + ?Sized,
    I: Iterator<Item = &'a Individual>,
{
    individuals
        .min_by(|a, b| objective.compare_individuals(a, b))
        .expect("selection pool must not be empty")
}
