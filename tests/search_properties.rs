//! Property tests for the tour invariants and both generational loops.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tsp_evo::ga::operators::{mutate, pmx, pmx_at, swap_positions};
use tsp_evo::ga::{
    crossover_step, init_population, mutation_step, ParentSelection, SearchConfig, SearchRunner,
    Strategy as SearchStrategy,
};
use tsp_evo::geometry::{tour_length, CityTable, Point};
use tsp_evo::random::create_rng;
use tsp_evo::tour::{is_valid_permutation, Tour};
use tsp_evo::Error;

fn arb_cities(min: usize, max: usize) -> impl Strategy<Value = CityTable> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), min..=max).prop_map(|coords| {
        CityTable::from_points(
            coords
                .into_iter()
                .map(|(x, y)| Point::new(f64::from(x), f64::from(y))),
        )
        .unwrap()
    })
}

fn shuffled(n: usize, seed: u64) -> Tour {
    let mut ids: Vec<usize> = (1..=n).collect();
    ids.shuffle(&mut rand::rngs::StdRng::seed_from_u64(seed));
    Tour::new(ids).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_tours_are_permutations(n in 1usize..200, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let tour = Tour::random(n, &mut rng).unwrap();
        prop_assert_eq!(tour.len(), n);
        let mut sorted = tour.into_inner();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn tour_length_rotation_invariant(cities in arb_cities(1, 40), seed in any::<u64>(), k in any::<usize>()) {
        let tour = shuffled(cities.len(), seed).into_inner();
        let mut rotated = tour.clone();
        rotated.rotate_left(k % tour.len());
        let a = tour_length(&tour, &cities).unwrap();
        let b = tour_length(&rotated, &cities).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
    }

    #[test]
    fn tour_length_reversal_invariant(cities in arb_cities(1, 40), seed in any::<u64>()) {
        let tour = shuffled(cities.len(), seed).into_inner();
        let mut reversed = tour.clone();
        reversed.reverse();
        let a = tour_length(&tour, &cities).unwrap();
        let b = tour_length(&reversed, &cities).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
    }

    #[test]
    fn pmx_closure(n in 3usize..60, seed_s in any::<u64>(), seed_t in any::<u64>(), c_raw in any::<usize>()) {
        let s = shuffled(n, seed_s);
        let t = shuffled(n, seed_t);
        let c = 1 + c_raw % (n - 2);
        let (first, second) = pmx_at(&s, &t, c).unwrap();
        prop_assert!(is_valid_permutation(first.as_slice()));
        prop_assert!(is_valid_permutation(second.as_slice()));
        prop_assert_eq!(&first.as_slice()[..=c], &t.as_slice()[..=c]);
        prop_assert_eq!(&second.as_slice()[..=c], &s.as_slice()[..=c]);
    }

    #[test]
    fn pmx_random_point_never_errors(n in 3usize..40, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let s = Tour::random(n, &mut rng).unwrap();
        let t = Tour::random(n, &mut rng).unwrap();
        prop_assert!(pmx(&s, &t, &mut rng).is_ok());
    }

    #[test]
    fn mutate_preserves_permutation(n in 1usize..100, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let parent = Tour::random(n, &mut rng).unwrap();
        let child = mutate(&parent, &mut rng).unwrap();
        prop_assert!(is_valid_permutation(child.as_slice()));
    }

    #[test]
    fn swap_equal_positions_is_identity(n in 1usize..50, seed in any::<u64>(), i_raw in any::<usize>()) {
        let tour = shuffled(n, seed);
        let i = i_raw % n;
        prop_assert_eq!(swap_positions(&tour, i, i).unwrap(), tour);
    }

    #[test]
    fn mutation_search_best_never_worsens(cities in arb_cities(2, 25), seed in any::<u64>(), gens in 0usize..40) {
        let config = SearchConfig::default()
            .with_population_size(6)
            .with_max_generations(gens)
            .with_seed(seed);
        let result = SearchRunner::run(&cities, &config).unwrap();
        prop_assert_eq!(result.score_history.len(), gens + 1);
        for w in result.score_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn crossover_search_best_never_worsens(cities in arb_cities(3, 25), seed in any::<u64>(), pop in 2usize..15, gens in 0usize..30) {
        let config = SearchConfig::default()
            .with_strategy(SearchStrategy::Crossover)
            .with_population_size(pop)
            .with_max_generations(gens)
            .with_seed(seed);
        let result = SearchRunner::run(&cities, &config).unwrap();
        for w in result.score_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
        prop_assert!(is_valid_permutation(result.best_tour.as_slice()));
    }

    #[test]
    fn single_steps_keep_population_size(cities in arb_cities(3, 20), seed in any::<u64>(), pop in 2usize..20) {
        let mut rng = create_rng(seed);
        let current = init_population(&cities, pop, &mut rng).unwrap();
        let mutated = mutation_step(&current, &cities, &mut rng).unwrap();
        let crossed = crossover_step(&current, &cities, ParentSelection::Uniform, &mut rng).unwrap();
        prop_assert_eq!(mutated.len(), pop);
        prop_assert_eq!(crossed.len(), pop);
    }
}

#[test]
fn unit_square_mutation_search_finds_optimum() {
    let cities = CityTable::from_points([
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ])
    .unwrap();
    for seed in 0..10 {
        let config = SearchConfig::default()
            .with_population_size(4)
            .with_max_generations(50)
            .with_seed(seed);
        let result = SearchRunner::run(&cities, &config).unwrap();
        assert!(
            (result.best_score - 4.0).abs() < 1e-9,
            "seed {seed}: expected 4.0, got {}",
            result.best_score
        );
    }
}

#[test]
fn invalid_tour_is_reported_not_repaired() {
    let cities = CityTable::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
    assert!(matches!(
        tour_length(&[1, 1], &cities),
        Err(Error::InvalidTour(_))
    ));
}
