use rand::{Rng, SeedableRng, random_range, rngs::StdRng};

/// Source of uniformly distributed integers. Injected into [`Dice`](super::Dice)
/// so games can be replayed from a seed.
pub trait RandomSource {
    /// Returns a value in the inclusive range `[min, max]`.
    fn next_int(&mut self, min: u32, max: u32) -> u32;
}

/// Draws from the thread local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        random_range(min..=max)
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { rng: StdRng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling once exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[u32]) -> Self {
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        ScriptedRandom { values: values.to_vec(), next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        assert!((min..=max).contains(&value), "scripted value {value} outside {min}..={max}");
        value
    }
}
