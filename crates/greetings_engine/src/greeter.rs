/* # Why is template selection private?

The Greeter exposes `greet` and `greet_many`; which template a draw lands on
is an implementation detail. Callers rely only on the contract: a non-empty
name always yields a greeting containing that name, drawn from the configured
set.
*/

use std::collections::HashMap;

use tracing::{debug, instrument};

use greetings_base::error::ErrorKind;
use greetings_base::{GreetingsError, GreetingsResult, RngHandle};

use crate::Config;

/// Turns names into greetings.
///
/// Holds the immutable template set and the injected random source. Each call
/// is stateless aside from the draws it consumes from the source.
///
/// # Examples
/// ```
/// use greetings_base::{RngHandle, SystemRng};
/// use greetings_engine::{Config, Greeter};
///
/// let greeter = Greeter::new(Config::default(), RngHandle::new(SystemRng::new())).unwrap();
/// let greeting = greeter.greet("Gladys").unwrap();
/// assert!(greeting.contains("Gladys"));
/// ```
#[derive(Debug)]
pub struct Greeter {
    config: Config,
    rng: RngHandle,
}

impl Greeter {
    /// Create a Greeter over the given template set and random source.
    ///
    /// The config is validated here, so every later call with a non-empty
    /// name is guaranteed to succeed.
    pub fn new(config: Config, rng: RngHandle) -> GreetingsResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Produce a greeting for a single name.
    ///
    /// Fails with `ErrorKind::EmptyName` when `name` is the empty string.
    /// Otherwise selects one template uniformly at random and substitutes
    /// `name` into its slot; the result contains `name` as a substring.
    pub fn greet(&self, name: &str) -> GreetingsResult<String> {
        if name.is_empty() {
            return Err(Box::new(GreetingsError::new(ErrorKind::EmptyName)));
        }
        let template = self.random_template();
        debug!(name, template, "formatting greeting");
        Ok(template.replace("{name}", name))
    }

    /// Produce greetings for a batch of names.
    ///
    /// Names are greeted in sequence order; duplicate names keep the last
    /// greeting produced for them. On the first failure the whole batch
    /// fails and no partial mapping is surfaced.
    ///
    /// # Returns
    /// On success, a mapping with exactly one entry per distinct input name.
    /// An empty input yields an empty mapping.
    #[instrument(skip(self, names), fields(name_count = names.len()))]
    pub fn greet_many(&self, names: &[String]) -> GreetingsResult<HashMap<String, String>> {
        let mut greetings = HashMap::with_capacity(names.len());
        for name in names {
            let greeting = self.greet(name)?;
            greetings.insert(name.clone(), greeting);
        }
        Ok(greetings)
    }

    /// Select one template uniformly at random from the configured set.
    fn random_template(&self) -> &str {
        // validate() guarantees the set is non-empty
        let index = self.rng.pick(self.config.templates.len());
        &self.config.templates[index]
    }
}
