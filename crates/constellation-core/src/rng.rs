use crate::seed::Seed;

/// Linear congruential stream shared by the layout generator and the animated renderer.
///
/// The recurrence is `state = (state * 1103515245 + 12345) & 0x7fffffff`. Only the low 31 bits
/// survive the mask, so wrapping 32-bit arithmetic reproduces it exactly on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_103_515_245;
    pub const INCREMENT: u32 = 12_345;
    pub const MASK: u32 = 0x7fff_ffff;

    pub fn new(seed: Seed) -> Self {
        // Truncation keeps the residue mod 2^32, which is all the recurrence observes.
        Self {
            state: seed.value() as u32,
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u31(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & Self::MASK;
        self.state
    }

    /// Advances once and returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u31()) / 2_147_483_648.0
    }
}
