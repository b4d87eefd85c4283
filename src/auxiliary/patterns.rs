//! Seed patterns as flat indices into an 8 wide grid.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [usize],
}

/// Heads up and to the right, one cell every four generations.
pub const GLIDER: &[usize] = &[27, 28, 29, 37, 44];

/// Grows into `RING` after one generation.
pub const PLUS: &[usize] = &[10, 17, 18, 19, 26];

pub const RING: &[usize] = &[9, 10, 11, 17, 19, 25, 26, 27];

/// Runs off the bottom of an 8x8 grid; the last three indices are dropped when seeding.
pub const SCATTER: &[usize] = &[
    16, 17, 18, 31, 32, 33, 34, 35, 36, 58, 59, 60, 61, 62, 63, 64, 65, 66,
];

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: GLIDER,
    },
    Pattern {
        name: "Plus",
        cells: PLUS,
    },
    Pattern {
        name: "Ring",
        cells: RING,
    },
    Pattern {
        name: "Scatter",
        cells: SCATTER,
    },
];
