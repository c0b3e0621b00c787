use std::sync::Arc;

/* # Why is RandomSource a trait instead of a struct?

Using a trait enables two key benefits:
1. **Testability**: MockRng implements RandomSource for deterministic tests
   with scripted draws
2. **Flexibility**: Code depends on the abstraction, not the concrete generator
*/

/// Source of random indices for template selection.
///
/// Implement this trait to provide custom selection behavior. Two
/// implementations are provided:
/// - `SystemRng`: Seeded pseudo-random generator for production use
/// - `MockRng`: Scripted draws for testing
pub trait RandomSource: std::fmt::Debug + Send + Sync + 'static {
    /// Draw a uniformly distributed index in `0..bound`.
    ///
    /// Callers must pass `bound > 0`. Successive draws are independent, with
    /// replacement: there is no coverage guarantee and no guarantee against
    /// immediate repeats.
    fn pick(&self, bound: usize) -> usize;
}

/* # Why use Arc<dyn RandomSource> with RngHandle?

Arc enables cheap cloning of the random source, allowing it to be shared
across multiple parts of the application. RngHandle wraps this for ergonomic
Deref access and Clone support, avoiding lifetime parameters when passing the
source through the codebase.
*/

/// Handle to a RandomSource implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn RandomSource>` for cheap cloning and thread-safe
/// sharing. Can be cloned and passed around freely without lifetime concerns.
///
/// # Examples
///
/// ```
/// use greetings_base::{RngHandle, SystemRng};
///
/// let rng = RngHandle::new(SystemRng::new());
/// let rng_clone = rng.clone(); // Cheap clone, shares the same generator
/// ```
#[derive(Debug, Clone)]
pub struct RngHandle(Arc<dyn RandomSource>);

impl RngHandle {
    /// Create a new RngHandle from a RandomSource implementation.
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self(Arc::new(rng))
    }
}

impl std::ops::Deref for RngHandle {
    type Target = dyn RandomSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::MockRng;

    #[test]
    fn test_rng_handle_clone_shares_state() {
        let handle = RngHandle::new(MockRng::with_picks(vec![2, 1]));
        let clone = handle.clone();
        // Draws through either handle consume the same script
        assert_eq!(handle.pick(3), 2);
        assert_eq!(clone.pick(3), 1);
    }

    #[test]
    fn test_rng_handle_deref() {
        let handle = RngHandle::new(MockRng::new());
        assert_eq!(handle.pick(3), 0);
    }
}
