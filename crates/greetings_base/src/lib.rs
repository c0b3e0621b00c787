/* # Why have greetings_base as a core library?
greetings_base provides the foundational error handling, tracing setup and the
random-source abstraction used across all crates. This ensures consistency in
error handling and prevents circular dependencies between crates.
*/

pub mod error;
pub mod rng;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreetingsError, GreetingsResult, ResultExt};
pub use rng::{MockRng, RandomSource, RngHandle, SystemRng};
