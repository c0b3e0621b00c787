/* # What is the random-source abstraction?

Template selection needs randomness, and process-global random state is hard to
test. Instead, the random source is an explicitly constructed object injected
into the Greeter:
- Testability: MockRng allows deterministic unit tests with scripted draws
- Flexibility: Switch between entropy-seeded and fixed-seeded generators
- Consistency: All randomness flows through the same trait

Code depends on the RandomSource trait, not on a concrete generator.
*/

mod mock;
mod system;
mod traits;

pub use mock::MockRng;
pub use system::SystemRng;
pub use traits::{RandomSource, RngHandle};
