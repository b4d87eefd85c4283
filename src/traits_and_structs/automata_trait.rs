/// What the window shell needs from a simulation.
pub trait CellAutomata {
    /// Paint the current generation into an RGBA frame.
    fn draw(&self, screen: &mut [u8]);
    fn update(&mut self);
    fn clear(&mut self);
    fn reseed(&mut self, pattern: &[usize]);
    fn randomize(&mut self, rng: &mut randomize::PCG32);
    fn describe() -> String;
}
