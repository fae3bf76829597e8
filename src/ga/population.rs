//! Initial population.

use rand::Rng;

use super::types::Generation;
use crate::error::{Error, Result};
use crate::geometry::CityTable;
use crate::tour::Tour;

/// Builds the first generation: `pop_size` uniformly random tours, scored and sorted.
///
/// # Errors
/// [`Error::InvalidInput`] if `pop_size` is zero.
pub fn init_population<R: Rng>(
    cities: &CityTable,
    pop_size: usize,
    rng: &mut R,
) -> Result<Generation> {
    if pop_size == 0 {
        return Err(Error::InvalidInput("population size must be positive".into()));
    }
    let n = cities.len();
    let tours = (0..pop_size)
        .map(|_| Tour::random(n, rng))
        .collect::<Result<Vec<_>>>()?;
    Generation::from_tours(tours, cities)
}
