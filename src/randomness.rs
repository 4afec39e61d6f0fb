use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::ops::RangeInclusive;

/// Source of the mock tracker's noise. Both methods sample uniformly from an inclusive range.
pub trait RandomSource: Debug + Send {
    fn real(&mut self, range: RangeInclusive<f64>) -> f64;
    fn integer(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Builds the source for the given seed, falling back to the thread-local OS-seeded generator.
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(SystemRandom),
    }
}

#[derive(Debug, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn real(&mut self, range: RangeInclusive<f64>) -> f64 {
        rand::rng().random_range(range)
    }

    fn integer(&mut self, range: RangeInclusive<u32>) -> u32 {
        rand::rng().random_range(range)
    }
}

#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn real(&mut self, range: RangeInclusive<f64>) -> f64 {
        self.rng.random_range(range)
    }

    fn integer(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Replays scripted fractions of each requested range: `0.0` picks the lower bound, `1.0` the upper bound.
/// Wraps around once the script is exhausted.
#[cfg(test)]
#[derive(Debug)]
pub struct ScriptedRandom {
    fractions: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(fractions: Vec<f64>) -> Self {
        assert!(!fractions.is_empty(), "a script needs at least one fraction");
        ScriptedRandom { fractions, next: 0 }
    }

    fn next_fraction(&mut self) -> f64 {
        let fraction = self.fractions[self.next % self.fractions.len()];
        self.next += 1;
        fraction
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn real(&mut self, range: RangeInclusive<f64>) -> f64 {
        let fraction = self.next_fraction();
        range.start() + fraction * (range.end() - range.start())
    }

    fn integer(&mut self, range: RangeInclusive<u32>) -> u32 {
        let fraction = self.next_fraction();
        let span = (range.end() - range.start()) as f64;
        range.start() + (fraction * span).round() as u32
    }
}
