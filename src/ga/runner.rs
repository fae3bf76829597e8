//! Generational loop execution.
//!
//! [`SearchRunner`] drives one of three loops for exactly `max_generations`
//! steps: initialize → step → step → ... → best of the final generation.
//! The single step functions are public so callers and tests can advance a
//! generation by hand.

use std::time::{Duration, Instant};

use rand::Rng;

use super::config::{SearchConfig, Strategy};
use super::operators::{mutate, pmx};
use super::population::init_population;
use super::selection::ParentSelection;
use super::types::{Generation, Individual, SearchObserver};
use crate::error::{Error, Result};
use crate::geometry::CityTable;
use crate::random::seeded_or_fresh;
use crate::tour::Tour;

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best tour of the final generation.
    pub best_tour: Tour,

    /// Cyclic length of `best_tour`.
    pub best_score: f64,

    /// Loop that produced the result.
    pub strategy: Strategy,

    /// Population size used (0 for random search).
    pub population_size: usize,

    /// Number of generations executed.
    pub generations: usize,

    /// Seed the run was driven by; replaying it reproduces the result.
    pub seed: u64,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,

    /// Best score of the initial generation, then after each generation.
    pub score_history: Vec<f64>,
}

/// Executes a search.
///
/// # Usage
///
/// ```ignore
/// let cities = tsp_evo::io::load_cities("cities.txt")?;
/// let config = SearchConfig::default().with_seed(42);
/// let result = SearchRunner::run(&cities, &config)?;
/// println!("best: {}", result.best_score);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the configured search.
    pub fn run(cities: &CityTable, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_observer(cities, config, |_: usize, _: &Individual| {})
    }

    /// Runs the configured search, reporting each generation's best to `observer`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for bad parameters, [`Error::InvalidInput`] if
    /// crossover search is asked to run on fewer than 3 cities. Tour errors
    /// only surface if an operator breaks the permutation invariant.
    pub fn run_with_observer<O: SearchObserver>(
        cities: &CityTable,
        config: &SearchConfig,
        mut observer: O,
    ) -> Result<SearchResult> {
        config.validate()?;
        if config.strategy == Strategy::Crossover && cities.len() < 3 {
            return Err(Error::InvalidInput(format!(
                "crossover search needs at least 3 cities, got {}",
                cities.len()
            )));
        }

        let start = Instant::now();
        let (mut rng, seed) = seeded_or_fresh(config.seed);

        tracing::info!(
            strategy = %config.strategy,
            cities = cities.len(),
            population_size = config.reported_population_size(),
            max_generations = config.max_generations,
            seed,
            "search started"
        );

        let population_size = match config.strategy {
            Strategy::Random => 1,
            _ => config.population_size,
        };
        let mut current = init_population(cities, population_size, &mut rng)?;
        let mut score_history = Vec::with_capacity(config.max_generations + 1);
        score_history.push(current.best().score);

        for gen in 1..=config.max_generations {
            let next = match config.strategy {
                Strategy::Mutation => mutation_step(&current, cities, &mut rng)?,
                Strategy::Crossover => {
                    crossover_step(&current, cities, config.selection, &mut rng)?
                }
                Strategy::Random => random_step(&current, cities, &mut rng)?,
            };

            let previous_best = current.best().score;
            current = next;
            let best = current.best();
            if best.score < previous_best {
                tracing::debug!(generation = gen, best_score = best.score, "improved");
            }
            score_history.push(best.score);
            observer.on_generation(gen, best);
        }

        let best = current.into_best();
        let elapsed = start.elapsed();

        tracing::info!(
            strategy = %config.strategy,
            best_score = best.score,
            generations = config.max_generations,
            elapsed_secs = elapsed.as_secs_f64(),
            "search finished"
        );

        Ok(SearchResult {
            best_tour: best.tour,
            best_score: best.score,
            strategy: config.strategy,
            population_size: config.reported_population_size(),
            generations: config.max_generations,
            seed,
            elapsed,
            score_history,
        })
    }
}

/// One mutation-search generation.
///
/// The elite (best of `current`) is carried over unchanged; the remaining
/// `len - 1` slots are independent swap mutants of the elite's tour.
pub fn mutation_step<R: Rng>(
    current: &Generation,
    cities: &CityTable,
    rng: &mut R,
) -> Result<Generation> {
    let elite = current.best();
    let mut next = Vec::with_capacity(current.len());
    next.push(elite.clone());
    for _ in 1..current.len() {
        let child = mutate(&elite.tour, rng)?;
        next.push(Individual::evaluate(child, cities)?);
    }
    Generation::from_individuals(next)
}

/// One crossover-search generation.
///
/// The top `⌊len / 2⌋` individuals are kept; the rest are PMX offspring of
/// parent pairs drawn from that top half by `selection`. Offspring come in
/// pairs, so when the remaining slot count is odd the second child of the
/// last pair is dropped.
pub fn crossover_step<R: Rng>(
    current: &Generation,
    cities: &CityTable,
    selection: ParentSelection,
    rng: &mut R,
) -> Result<Generation> {
    let pop_size = current.len();
    let top_half = current.top(pop_size / 2);
    if top_half.is_empty() {
        return Err(Error::InvalidInput(
            "crossover search needs a population of at least 2".into(),
        ));
    }

    let mut offspring = Vec::with_capacity(pop_size - top_half.len() + 1);
    while top_half.len() + offspring.len() < pop_size {
        let s = &top_half[selection.select(top_half, rng)].tour;
        let t = &top_half[selection.select(top_half, rng)].tour;
        let (first, second) = pmx(s, t, rng)?;
        offspring.push(first);
        offspring.push(second);
    }
    offspring.truncate(pop_size - top_half.len());

    let mut next = top_half.to_vec();
    for child in offspring {
        next.push(Individual::evaluate(child, cities)?);
    }
    Generation::from_individuals(next)
}

/// One random-search draw: a fresh random tour replaces the best only if shorter.
pub fn random_step<R: Rng>(
    current: &Generation,
    cities: &CityTable,
    rng: &mut R,
) -> Result<Generation> {
    let candidate = Individual::evaluate(Tour::random(cities.len(), rng)?, cities)?;
    let best = if candidate.score < current.best().score {
        candidate
    } else {
        current.best().clone()
    };
    Generation::from_individuals(vec![best])
}

// ============================================================================
// Tests
// ============================================================================
