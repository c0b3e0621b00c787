use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::RandomSource;

/* # Why scripted draws instead of a seeded generator for tests?

A scripted mock lets a test state exactly which template each call selects,
without depending on the generator algorithm. Arc<Mutex<..>> interior state
keeps the mock cloneable and thread-safe so clones of a handle observe the
same script, matching how the production source is shared.
*/

/// Deterministic random source for testing.
///
/// Returns the scripted picks in order, reduced modulo the requested bound to
/// stay in range. When the script is exhausted (or empty), every draw
/// returns 0.
///
/// # Examples
///
/// ```
/// use greetings_base::{MockRng, RandomSource};
///
/// let rng = MockRng::with_picks(vec![2, 0]);
/// assert_eq!(rng.pick(3), 2);
/// assert_eq!(rng.pick(3), 0);
/// assert_eq!(rng.pick(3), 0); // script exhausted
/// ```
#[derive(Debug, Clone)]
pub struct MockRng {
    picks: Arc<Mutex<VecDeque<usize>>>,
}

impl MockRng {
    /// Create a MockRng with an empty script; every draw returns 0.
    pub fn new() -> Self {
        Self {
            picks: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a MockRng that returns the given picks in order.
    pub fn with_picks(picks: Vec<usize>) -> Self {
        Self {
            picks: Arc::new(Mutex::new(picks.into())),
        }
    }

    /// Append a pick to the script.
    pub fn push_pick(&self, pick: usize) {
        self.picks.lock().unwrap().push_back(pick);
    }
}

impl Default for MockRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for MockRng {
    fn pick(&self, bound: usize) -> usize {
        self.picks.lock().unwrap().pop_front().unwrap_or(0) % bound
    }
}
