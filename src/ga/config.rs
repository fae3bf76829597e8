//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter that controls a run.

use std::fmt;

use super::selection::ParentSelection;
use crate::error::{Error, Result};

/// Which generational loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Elitist hill-climb: the best tour plus `population_size - 1` swap mutants.
    #[default]
    Mutation,

    /// Top half retained, the rest filled with PMX offspring of the top half.
    Crossover,

    /// Best of `max_generations` independent random tours.
    Random,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Mutation => "mutation",
            Strategy::Crossover => "crossover",
            Strategy::Random => "random",
        };
        f.write_str(name)
    }
}

/// Configuration for a search run.
///
/// # Defaults
///
/// ```
/// use tsp_evo::ga::{SearchConfig, Strategy};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.strategy, Strategy::Mutation);
/// assert_eq!(config.population_size, 750);
/// assert_eq!(config.max_generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evo::ga::{ParentSelection, SearchConfig, Strategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(Strategy::Crossover)
///     .with_population_size(500)
///     .with_selection(ParentSelection::Tournament(3))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Generational loop to run.
    pub strategy: Strategy,

    /// Number of tours per generation. Ignored by [`Strategy::Random`].
    pub population_size: usize,

    /// Number of generations; the loop runs exactly this many times.
    pub max_generations: usize,

    /// How crossover parents are drawn from the retained top half.
    pub selection: ParentSelection,

    /// Random seed for reproducibility. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            population_size: 750,
            max_generations: 10_000,
            selection: ParentSelection::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_selection(mut self, selection: ParentSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size as reported for this strategy (0 for random search).
    pub fn reported_population_size(&self) -> usize {
        match self.strategy {
            Strategy::Random => 0,
            _ => self.population_size,
        }
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] describing the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.strategy != Strategy::Random && self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if let ParentSelection::Tournament(0) = self.selection {
            return Err(Error::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
