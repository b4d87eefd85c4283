use log::warn;

use super::cell::Cell;
use super::config::{Adjacency, LifeConfig};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size grid of cells stored row-major in a flat vector.
#[derive(Clone, Debug)]
pub struct Universe {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    adjacency: Adjacency,
    // Next generation is written here while `cells` is still being read.
    scratch_cells: Vec<Cell>,
}

impl Universe {
    pub fn new(config: &LifeConfig) -> Self {
        Self::new_empty(config.width, config.height, config.adjacency)
    }

    pub fn new_empty(width: usize, height: usize, adjacency: Adjacency) -> Self {
        assert!(width != 0 && height != 0);
        // Narrower rows make flat offsets alias each other.
        assert!(adjacency == Adjacency::Bounded || width >= 3);
        let size = width.checked_mul(height).expect("too big");
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
            adjacency,
            scratch_cells: vec![Cell::default(); size],
        }
    }

    /// Build a universe with only `pattern` alive.
    pub fn with_pattern(config: &LifeConfig, pattern: &[usize]) -> Self {
        let mut result = Self::new(config);
        result.seed(pattern);
        result
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn live_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
    }

    /// Kill everything, then bring each listed index to life.
    /// Indices past the end of the grid are skipped.
    pub fn seed(&mut self, pattern: &[usize]) {
        self.clear();
        for &i in pattern {
            if i < self.cells.len() {
                self.cells[i] = Cell::Alive;
            } else {
                warn!(
                    "seed index {} is outside a {}x{} grid, skipping",
                    i, self.width, self.height
                );
            }
        }
    }

    /// Each cell comes alive with probability `fill`.
    pub fn randomize(&mut self, rng: &mut randomize::PCG32, fill: f32) {
        for c in self.cells.iter_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < fill;
            *c = Cell::new(alive);
        }
    }

    /// Indices of the cells adjacent to `index`, diagonals included.
    /// Offsets that fall outside the grid are left out.
    pub fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> {
        let w = self.width as isize;
        let len = self.cells.len() as isize;
        let i = index as isize;
        let col = i % w;
        let bounded = self.adjacency == Adjacency::Bounded;

        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            if bounded && !(0..w).contains(&(col + dx)) {
                return None;
            }
            let n = i + dy * w + dx;
            if (0..len).contains(&n) {
                Some(n as usize)
            } else {
                None
            }
        })
    }

    pub fn count_live_neighbors(&self, index: usize) -> u8 {
        self.neighbor_indices(index)
            .filter(|&n| self.cells[n].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        for idx in 0..self.cells.len() {
            let live = self.count_live_neighbors(idx);
            // Write into `self.scratch_cells`, since we're still reading from `self.cells`
            self.scratch_cells[idx] = self.cells[idx].next_state(live);
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
    }

    #[must_use]
    pub fn next_generation(&self) -> Self {
        let mut next = self.clone();
        next.step();
        next
    }

    pub fn grid_idx<I: std::convert::TryInto<usize>>(&self, x: I, y: I) -> Option<usize> {
        if let (Ok(x), Ok(y)) = (x.try_into(), y.try_into()) {
            if x < self.width && y < self.height {
                Some(x + y * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }
}

// The scratch buffer holds stale data and takes no part in equality.
impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.adjacency == other.adjacency
            && self.cells == other.cells
    }
}

impl Eq for Universe {}
