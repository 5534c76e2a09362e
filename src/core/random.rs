/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Small deterministic RNG. Seeded from config so autopilot runs replay.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // xorshift has a fixed point at zero
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [-spread / 2, spread / 2).
    pub fn centered(&mut self, spread: f32) -> f32 {
        self.next_f32() * spread - spread * 0.5
    }
}
