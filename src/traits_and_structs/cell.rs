#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Birth on exactly three live neighbors, survival on two or three.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        Self::new(live_neighbors == 3 || (self.is_alive() && live_neighbors == 2))
    }

    pub fn toggle(&mut self) {
        *self = Self::new(!self.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_is_born_on_three() {
        for n in 0..=8 {
            assert_eq!(Cell::Dead.next_state(n).is_alive(), n == 3, "n = {}", n);
        }
    }

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for n in 0..=8 {
            assert_eq!(
                Cell::Alive.next_state(n).is_alive(),
                n == 2 || n == 3,
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn toggle_flips() {
        let mut c = Cell::default();
        assert_eq!(c, Cell::Dead);
        c.toggle();
        assert_eq!(c, Cell::Alive);
        c.toggle();
        assert_eq!(c, Cell::Dead);
    }
}
