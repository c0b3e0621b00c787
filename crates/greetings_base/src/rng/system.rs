use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::RandomSource;

/* # Why StdRng behind a Mutex instead of thread_rng?

The generator is constructed once and injected, so repeated runs of the
program vary (entropy seed) while a fixed seed makes every draw reproducible.
thread_rng would hide the seed and reintroduce the process-global state this
abstraction exists to remove. Drawing mutates the generator, and RandomSource
takes &self, hence the Mutex.
*/

/// Seeded pseudo-random source for production use.
///
/// `new()` seeds from OS entropy so each process invocation draws a different
/// sequence. `with_seed()` produces a fully deterministic sequence, useful for
/// reproducing a run.
#[derive(Debug)]
pub struct SystemRng {
    rng: Mutex<StdRng>,
}

impl SystemRng {
    /// Create a SystemRng seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a SystemRng with a fixed seed for deterministic draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRng {
    fn pick(&self, bound: usize) -> usize {
        self.rng.lock().unwrap().gen_range(0..bound)
    }
}
