//! Euclidean Traveling Salesman search by population-based local search.
//!
//! Given city coordinates, the crate searches visiting orders (tours) for a
//! short cyclic route using two generational strategies:
//!
//! - **Mutation search**: the best tour of each generation survives unchanged
//!   and the rest of the next generation are single-swap mutants of it.
//! - **Crossover search**: the better half survives and the rest are
//!   partially mapped crossover (PMX) offspring of that half.
//!
//! A random-restart baseline is included for comparison.
//!
//! # Layout
//!
//! - [`geometry`]: points, the city table, and cyclic tour length
//! - [`tour`]: the permutation-checked [`Tour`] type
//! - [`ga`]: operators, generations, and the search loops
//! - [`io`]: city-file loading and result reports
//! - [`random`]: seeded random sources
//!
//! ```
//! use tsp_evo::ga::{SearchConfig, SearchRunner};
//! use tsp_evo::geometry::{CityTable, Point};
//!
//! let cities = CityTable::from_points([
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ])
//! .unwrap();
//! let config = SearchConfig::default()
//!     .with_population_size(8)
//!     .with_max_generations(60)
//!     .with_seed(42);
//! let result = SearchRunner::run(&cities, &config).unwrap();
//! assert!((result.best_score - 4.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod io;
pub mod random;
pub mod tour;

pub use error::{Error, Result};
pub use tour::Tour;
