use std::time::Duration;

use crate::auxiliary::patterns::GLIDER;

/// Which flat-index offsets count as neighbors at the left and right edges of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// Column-aware: cells at the end of a row do not see the next row's first cell.
    Bounded,
    /// Plain `i±1`, `i±width`, `i±width±1` arithmetic, checked only against `[0, N)`.
    /// Cells at a row edge count cells on the far side of the adjacent row.
    FlatIndex,
}

/// Compile-time settings for a run. Nothing here changes after startup.
#[derive(Clone, Copy, Debug)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Edge length of one cell, in pixels.
    pub cell_size: u32,
    /// Time between generations.
    pub tick: Duration,
    pub seed: &'static [usize],
    pub adjacency: Adjacency,
    /// Chance of a cell starting alive when randomizing.
    pub random_fill: f32,
}

impl LifeConfig {
    pub const DEFAULT: LifeConfig = LifeConfig {
        width: 8,
        height: 8,
        cell_size: 10,
        tick: Duration::from_millis(100),
        seed: GLIDER,
        adjacency: Adjacency::Bounded,
        random_fill: 0.5,
    };

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Size of the frame buffer in pixels.
    pub fn screen_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
