/* # Why is the CLI minimal and hardcoded?

The CLI is intentionally kept minimal with no argument parsing or
configuration options beyond positional names. This approach:

1. **Reduces complexity**: No clap or similar dependency needed
2. **Simplifies testing**: Just run `greetings` or `greetings <name>...`
3. **Clear conventions**: Always looks for `greetings.toml` in the current
   directory, falling back to the built-in template set when absent
4. **Fast iteration**: Can add arguments later when use cases emerge

The workflow is straightforward:
1. Optionally place a `greetings.toml` with a `templates` list in the
   current directory
2. Run `greetings Gladys` for a single greeting, or `greetings` to greet
   the default trio

Exit codes:
- 0: Success (greetings printed)
- 1: Error (config invalid, or a name was empty)
*/

use std::env;
use std::path::Path;
use std::process;

use greetings_base::tracing::init_tracing;
use greetings_base::{RngHandle, SystemRng};
use greetings_engine::{Config, Greeter, load_config};

const CONFIG_FILE: &str = "greetings.toml";

fn main() {
    init_tracing().unwrap();

    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("greetings: {}", e);
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let greeter = match Greeter::new(config, RngHandle::new(SystemRng::new())) {
        Ok(greeter) => greeter,
        Err(e) => {
            eprintln!("greetings: {}", e);
            process::exit(1);
        }
    };

    let names: Vec<String> = env::args().skip(1).collect();
    if let [name] = names.as_slice() {
        // Single name: print the bare greeting
        match greeter.greet(name) {
            Ok(greeting) => println!("{}", greeting),
            Err(e) => {
                eprintln!("greetings: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    // No names given: greet the default trio
    let names = if names.is_empty() {
        vec![
            "Gladys".to_string(),
            "Samantha".to_string(),
            "Darrin".to_string(),
        ]
    } else {
        names
    };

    match greeter.greet_many(&names) {
        Ok(greetings) => {
            for (name, greeting) in &greetings {
                println!("{}: {}", name, greeting);
            }
        }
        Err(e) => {
            eprintln!("greetings: {}", e);
            process::exit(1);
        }
    }
}
