pub mod config;
pub mod greeter;

pub use config::{Config, load_config};
pub use greeter::Greeter;
