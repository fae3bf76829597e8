//! The tour representation and its permutation validator.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::random::shuffle;

/// Returns `true` if `ids` is a permutation of `1..=ids.len()` and non-empty.
pub fn is_valid_permutation(ids: &[usize]) -> bool {
    let n = ids.len();
    if n == 0 {
        return false;
    }
    let mut seen = vec![false; n];
    for &id in ids {
        if id == 0 || id > n || seen[id - 1] {
            return false;
        }
        seen[id - 1] = true;
    }
    true
}

/// A visiting order over cities `1..=N`.
///
/// Every `Tour` in existence satisfies the permutation invariant: the only
/// constructors check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Wraps `cities` after checking that it is a permutation of `1..=N`.
    ///
    /// # Errors
    /// [`Error::InvalidTour`] if the check fails.
    pub fn new(cities: Vec<usize>) -> Result<Self> {
        if !is_valid_permutation(&cities) {
            return Err(Error::InvalidTour(format!("{cities:?}")));
        }
        Ok(Self { cities })
    }

    /// The identity tour `1, 2, ..., n`.
    pub fn identity(n: usize) -> Result<Self> {
        Self::new((1..=n).collect())
    }

    /// A uniformly random tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let mut cities: Vec<usize> = (1..=n).collect();
        shuffle(&mut cities, rng);
        Self::new(cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false` for a constructed tour.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cities
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.cities
    }

    /// Index of `city` in the visiting order, if present.
    pub fn position_of(&self, city: usize) -> Option<usize> {
        self.cities.iter().position(|&c| c == city)
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.cities
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = Error;

    fn try_from(cities: Vec<usize>) -> Result<Self> {
        Self::new(cities)
    }
}

/// Space-separated city ids.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.cities.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for city in iter {
                write!(f, " {city}")?;
            }
        }
        Ok(())
    }
}
