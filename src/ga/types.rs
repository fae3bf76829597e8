//! Scored tours, sorted generations, and the per-generation observer hook.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::geometry::CityTable;
use crate::tour::Tour;

/// A tour paired with its cyclic length. Lower score is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub score: f64,
    pub tour: Tour,
}

impl Individual {
    /// Scores `tour` against `cities`.
    pub fn evaluate(tour: Tour, cities: &CityTable) -> Result<Self> {
        let score = cities.tour_length(&tour)?;
        Ok(Self { score, tour })
    }
}

fn by_score(a: &Individual, b: &Individual) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}

/// A population sorted ascending by score.
///
/// Generations are never mutated after construction; each search step builds
/// a fresh one from the previous.
#[derive(Debug, Clone)]
pub struct Generation {
    individuals: Vec<Individual>,
}

impl Generation {
    /// Sorts already-scored individuals into a generation.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `individuals` is empty.
    pub fn from_individuals(mut individuals: Vec<Individual>) -> Result<Self> {
        if individuals.is_empty() {
            return Err(Error::InvalidInput("generation must not be empty".into()));
        }
        individuals.sort_by(by_score);
        Ok(Self { individuals })
    }

    /// Scores `tours` and sorts them into a generation.
    pub fn from_tours<I>(tours: I, cities: &CityTable) -> Result<Self>
    where
        I: IntoIterator<Item = Tour>,
    {
        let individuals = tours
            .into_iter()
            .map(|tour| Individual::evaluate(tour, cities))
            .collect::<Result<Vec<_>>>()?;
        Self::from_individuals(individuals)
    }

    /// The lowest-scoring individual.
    pub fn best(&self) -> &Individual {
        &self.individuals[0]
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: construction rejects empty generations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The `k` best individuals (or all of them if `k` exceeds the size).
    pub fn top(&self, k: usize) -> &[Individual] {
        &self.individuals[..k.min(self.individuals.len())]
    }

    pub fn into_best(mut self) -> Individual {
        self.individuals.swap_remove(0)
    }
}

/// Receives the best individual after every generation.
///
/// Closures `FnMut(usize, &Individual)` implement this trait, so progress
/// reporting can be plugged in without touching the search loop.
pub trait SearchObserver {
    /// Called after generation `generation` (1-based) has been built and sorted.
    fn on_generation(&mut self, generation: usize, best: &Individual);
}

impl<F> SearchObserver for F
where
    F: FnMut(usize, &Individual),
{
    fn on_generation(&mut self, generation: usize, best: &Individual) {
        self(generation, best)
    }
}
