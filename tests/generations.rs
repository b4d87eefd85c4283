use pretty_assertions::assert_eq;

use pixel_life::auxiliary::patterns::{GLIDER, PATTERNS, PLUS, RING, SCATTER};
use pixel_life::{Adjacency, Cell, LifeConfig, Universe};

fn config(adjacency: Adjacency) -> LifeConfig {
    LifeConfig {
        adjacency,
        ..LifeConfig::DEFAULT
    }
}

fn universe(pattern: &[usize]) -> Universe {
    Universe::with_pattern(&LifeConfig::DEFAULT, pattern)
}

#[test]
fn default_config_is_an_eight_by_eight_glider() {
    let config = LifeConfig::default();
    assert_eq!(config.cells(), 64);
    assert_eq!(config.screen_size(), (80, 80));
    assert_eq!(config.seed, &[27, 28, 29, 37, 44][..]);
    assert_eq!(config.adjacency, Adjacency::Bounded);
}

#[test]
fn empty_universe_stays_empty() {
    for adjacency in [Adjacency::Bounded, Adjacency::FlatIndex] {
        let mut u = Universe::new(&config(adjacency));
        u.step();
        assert_eq!(u.population(), 0);
        assert_eq!(u.len(), 64);
    }
}

#[test]
fn isolated_cell_dies() {
    let mut u = universe(&[36]);
    u.step();
    assert_eq!(u.live_indices(), Vec::<usize>::new());
}

#[test]
fn block_is_still_life() {
    let mut u = Universe::new(&LifeConfig::DEFAULT);
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        let idx = u.grid_idx(x, y).unwrap();
        u.set(idx, Cell::Alive);
    }
    let before = u.clone();
    assert_eq!(before.live_indices(), vec![18, 19, 26, 27]);
    u.step();
    assert_eq!(u, before);
    u.step();
    assert_eq!(u, before);
}

#[test]
fn step_is_deterministic() {
    let a = universe(SCATTER);
    let b = a.clone();
    assert_eq!(a.next_generation(), b.next_generation());

    let mut c = universe(SCATTER);
    let mut d = universe(SCATTER);
    for _ in 0..5 {
        c.step();
        d.step();
    }
    assert_eq!(c, d);
}

#[test]
fn glider_first_generation() {
    let mut u = universe(GLIDER);
    u.step();
    assert_eq!(u.live_indices(), vec![20, 28, 29, 35, 37]);
}

#[test]
fn glider_moves_up_and_right_every_four_generations() {
    for adjacency in [Adjacency::Bounded, Adjacency::FlatIndex] {
        let mut u = Universe::with_pattern(&config(adjacency), GLIDER);
        let expected = [
            vec![20, 28, 29, 35, 37],
            vec![20, 21, 27, 29, 37],
            vec![20, 21, 29, 30, 36],
            vec![20, 21, 22, 30, 37],
        ];
        for cells in expected.iter() {
            u.step();
            assert_eq!(&u.live_indices(), cells);
        }
        let shifted: Vec<usize> = GLIDER.iter().map(|i| i - 7).collect();
        assert_eq!(u.live_indices(), shifted);
    }
}

#[test]
fn plus_grows_into_ring() {
    let mut u = universe(PLUS);
    u.step();
    assert_eq!(u.live_indices(), RING.to_vec());
}

#[test]
fn edge_neighbors_outside_the_grid_are_ignored() {
    let bounded = Universe::new(&config(Adjacency::Bounded));
    let flat = Universe::new(&config(Adjacency::FlatIndex));
    assert_eq!(bounded.neighbor_indices(0).count(), 3);
    assert_eq!(flat.neighbor_indices(0).count(), 4);
    for u in [&bounded, &flat] {
        for i in 0..u.len() {
            assert!(u.neighbor_indices(i).all(|n| n < u.len()));
            assert!(u.count_live_neighbors(i) <= 8);
        }
    }
}

#[test]
fn row_edges_only_bleed_with_flat_indexing() {
    let mut bounded = Universe::with_pattern(&config(Adjacency::Bounded), &[6, 7, 8]);
    let mut flat = Universe::with_pattern(&config(Adjacency::FlatIndex), &[6, 7, 8]);
    bounded.step();
    flat.step();
    assert_eq!(bounded.live_indices(), Vec::<usize>::new());
    assert_eq!(flat.live_indices(), vec![7, 15]);
}

#[test]
fn scatter_seed_drops_cells_past_the_end() {
    let u = universe(SCATTER);
    assert_eq!(u.population(), SCATTER.len() - 3);
    assert_eq!(u.get(63), Cell::Alive);
}

#[test]
fn every_pattern_has_a_name() {
    let names: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Glider", "Plus", "Ring", "Scatter"]);
}
