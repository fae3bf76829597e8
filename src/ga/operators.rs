//! Tour operators: swap mutation and partially mapped crossover.
//!
//! Operators never modify their inputs; each returns freshly built tours and
//! re-checks the permutation invariant on the way out.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use rand::Rng;

use crate::error::{Error, Result};
use crate::tour::Tour;

// ============================================================================
// Mutation
// ============================================================================

/// Returns a copy of `tour` with positions `i` and `j` exchanged.
///
/// `i == j` yields an unchanged copy.
///
/// # Errors
/// [`Error::InvalidInput`] if either position is out of range.
pub fn swap_positions(tour: &Tour, i: usize, j: usize) -> Result<Tour> {
    let n = tour.len();
    if i >= n || j >= n {
        return Err(Error::InvalidInput(format!(
            "swap positions ({i}, {j}) out of range for tour of length {n}"
        )));
    }
    let mut child = tour.as_slice().to_vec();
    child.swap(i, j);
    Tour::new(child)
}

/// Swap mutation: two positions drawn independently from `0..N`, then exchanged.
///
/// The positions may coincide, in which case the child equals its parent.
///
/// # Complexity
/// O(N) for the copy and the output check.
pub fn mutate<R: Rng>(tour: &Tour, rng: &mut R) -> Result<Tour> {
    let n = tour.len();
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    swap_positions(tour, i, j)
}

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover with a random crossover point.
///
/// Draws `c` uniformly from `1..=N-2` and delegates to [`pmx_at`].
///
/// # Errors
/// [`Error::InvalidInput`] if the parents differ in length or `N < 3`.
pub fn pmx<R: Rng>(s: &Tour, t: &Tour, rng: &mut R) -> Result<(Tour, Tour)> {
    check_parents(s, t)?;
    let c = rng.random_range(1..=s.len() - 2);
    pmx_at(s, t, c)
}

/// Partially Mapped Crossover at crossover point `c`.
///
/// The first child starts as a copy of `s`; for each position `i` in `0..=c`
/// the city `t[i]` is swapped into position `i`. The second child is built the
/// same way from `t` against `s`. Each step is a transposition, so both
/// children stay permutations, and child one's prefix `[0..=c]` equals `t`'s
/// (child two's equals `s`'s).
///
/// ```
/// use tsp_evo::ga::operators::pmx_at;
/// use tsp_evo::Tour;
///
/// let s = Tour::new(vec![5, 7, 1, 3, 6, 4, 2]).unwrap();
/// let t = Tour::new(vec![4, 6, 2, 7, 3, 1, 5]).unwrap();
/// let (first, second) = pmx_at(&s, &t, 2).unwrap();
/// assert_eq!(first.as_slice(), &[4, 6, 2, 3, 7, 5, 1]);
/// assert_eq!(second.as_slice(), &[5, 7, 1, 6, 3, 2, 4]);
/// ```
///
/// # Complexity
/// O(N) time and space: a position index replaces the linear search for `t[i]`.
///
/// # Errors
/// [`Error::InvalidInput`] if the parents differ in length, `N < 3`, or `c`
/// lies outside `1..=N-2`.
pub fn pmx_at(s: &Tour, t: &Tour, c: usize) -> Result<(Tour, Tour)> {
    check_parents(s, t)?;
    let n = s.len();
    if !(1..=n - 2).contains(&c) {
        return Err(Error::InvalidInput(format!(
            "crossover point {c} outside 1..={} for tours of length {n}",
            n - 2
        )));
    }

    let first = pmx_child(s.as_slice(), t.as_slice(), c);
    let second = pmx_child(t.as_slice(), s.as_slice(), c);

    Ok((Tour::new(first)?, Tour::new(second)?))
}

/// Build one PMX child: start from `base`, pull `donor[0..=c]` into place.
fn pmx_child(base: &[usize], donor: &[usize], c: usize) -> Vec<usize> {
    let mut child = base.to_vec();
    // position[city] = index of `city` in `child`
    let mut position = vec![0usize; child.len() + 1];
    for (idx, &city) in child.iter().enumerate() {
        position[city] = idx;
    }

    for (i, &wanted) in donor.iter().enumerate().take(c + 1) {
        let j = position[wanted];
        let displaced = child[i];
        child.swap(i, j);
        position[wanted] = i;
        position[displaced] = j;
    }

    child
}

fn check_parents(s: &Tour, t: &Tour) -> Result<()> {
    if s.len() != t.len() {
        return Err(Error::InvalidInput(format!(
            "parents differ in length: {} vs {}",
            s.len(),
            t.len()
        )));
    }
    if s.len() < 3 {
        return Err(Error::InvalidInput(format!(
            "crossover needs at least 3 cities, got {}",
            s.len()
        )));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
