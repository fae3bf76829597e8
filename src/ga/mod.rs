//! Generational tour search.
//!
//! Two competing loops share one representation: a generation is a sorted
//! list of [`Individual`]s (score + tour), and each step builds the next
//! generation from the previous one.
//!
//! # Loops
//!
//! - [`Strategy::Mutation`]: elitist hill-climb, the best tour plus swap mutants of it
//! - [`Strategy::Crossover`]: top half retained, the rest PMX offspring of the top half
//! - [`Strategy::Random`]: best of independent random tours, as a baseline
//!
//! # Key Types
//!
//! - [`SearchConfig`]: run parameters
//! - [`SearchRunner`]: executes the configured loop
//! - [`SearchResult`]: best tour, score, timing, and score history
//!
//! # Submodules
//!
//! - [`operators`]: swap mutation and partially mapped crossover (PMX)
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{SearchConfig, Strategy};
pub use population::init_population;
pub use runner::{crossover_step, mutation_step, random_step, SearchResult, SearchRunner};
pub use selection::ParentSelection;
pub use types::{Generation, Individual, SearchObserver};
