// The randomness the spiral consumes, passed in explicitly.
// Seeding the source makes a spiral reproducible; the order of draws matters.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer/boolean source.
pub trait RandomSource {
    /// A value in `[0, bound)`. Bounds below 1 behave like 1 and yield 0.
    fn next_int(&mut self, bound: i32) -> i32;

    fn next_bool(&mut self) -> bool;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, bound: i32) -> i32 {
        (**self).next_int(bound)
    }

    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

/// Adapts any `rand::Rng` to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<Pcg32> {
    /// Deterministic source: same seed, same spiral.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Pcg32::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound: i32) -> i32 {
        self.rng.gen_range(0..bound.max(1))
    }

    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
