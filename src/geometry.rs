//! Coordinates, the city table, and tour-length evaluation.
//!
//! Cities are addressed by 1-based ids; the table stores them in load order
//! so city `id` lives at index `id - 1`. The table is immutable once built.

use crate::error::{Error, Result};
use crate::tour::{is_valid_permutation, Tour};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A city: a 1-based id and its location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: usize,
    pub location: Point,
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Ordered, index-addressable table of cities.
#[derive(Debug, Clone)]
pub struct CityTable {
    cities: Vec<City>,
}

impl CityTable {
    /// Builds a table from points in order; the i-th point becomes city `i + 1`.
    ///
    /// # Errors
    /// [`Error::EmptyCityTable`] if `points` is empty.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let cities: Vec<City> = points
            .into_iter()
            .enumerate()
            .map(|(i, location)| City { id: i + 1, location })
            .collect();
        if cities.is_empty() {
            return Err(Error::EmptyCityTable);
        }
        Ok(Self { cities })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Looks up a city by its 1-based id.
    pub fn get(&self, id: usize) -> Option<&City> {
        id.checked_sub(1).and_then(|idx| self.cities.get(idx))
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Distance between two cities given by id.
    ///
    /// # Panics
    /// Panics if either id is outside `1..=len`. Callers pass ids taken from
    /// a validated [`Tour`] of matching length.
    pub fn city_distance(&self, a: usize, b: usize) -> f64 {
        distance(self.cities[a - 1].location, self.cities[b - 1].location)
    }

    /// Cyclic length of a tour over this table, closing edge included.
    ///
    /// # Errors
    /// [`Error::InvalidTour`] if the tour does not cover exactly this table's cities.
    pub fn tour_length(&self, tour: &Tour) -> Result<f64> {
        if tour.len() != self.len() {
            return Err(Error::InvalidTour(format!(
                "tour visits {} cities but the table holds {}",
                tour.len(),
                self.len()
            )));
        }
        Ok(self.cyclic_sum(tour.as_slice()))
    }

    fn cyclic_sum(&self, ids: &[usize]) -> f64 {
        let n = ids.len();
        let closing = self.city_distance(ids[n - 1], ids[0]);
        ids.windows(2)
            .map(|w| self.city_distance(w[0], w[1]))
            .fold(closing, |acc, d| acc + d)
    }
}

/// Cyclic length of a raw id sequence.
///
/// Unlike [`CityTable::tour_length`], this checks the permutation invariant
/// on the slice itself.
///
/// # Errors
/// [`Error::InvalidTour`] if `tour` is not a permutation of `1..=cities.len()`.
pub fn tour_length(tour: &[usize], cities: &CityTable) -> Result<f64> {
    if tour.len() != cities.len() || !is_valid_permutation(tour) {
        return Err(Error::InvalidTour(format!("{tour:?}")));
    }
    Ok(cities.cyclic_sum(tour))
}
