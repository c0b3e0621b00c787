use std::fs;
use std::path::Path;

use serde::Deserialize;

use greetings_base::error::ErrorKind;
use greetings_base::{GreetingsError, GreetingsResult};

/// The placeholder each template substitutes a name into.
const NAME_SLOT: &str = "{name}";

/// The built-in template set, matching the classic greeting trio.
const DEFAULT_TEMPLATES: [&str; 3] = [
    "Hi, {name}. Welcome!",
    "Great to see you, {name}!",
    "Hail, {name}! Well met!",
];

/// Configuration for a greetings installation.
///
/// The template set is immutable once loaded: it is created at startup,
/// handed to the Greeter, and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Greeting templates, each with exactly one `{name}` slot.
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,
}

fn default_templates() -> Vec<String> {
    DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}

impl Config {
    /// Check the template set invariants.
    ///
    /// The set must be non-empty and every template must contain exactly one
    /// `{name}` slot, so that every produced greeting carries the greeted
    /// name as a literal substring.
    pub fn validate(&self) -> GreetingsResult<()> {
        if self.templates.is_empty() {
            return Err(greetings_base::err!("template set must not be empty"));
        }
        for template in &self.templates {
            if template.matches(NAME_SLOT).count() != 1 {
                return Err(Box::new(GreetingsError::new(ErrorKind::InvalidTemplate {
                    template: template.clone(),
                })));
            }
        }
        Ok(())
    }
}

/// Load a Config from a TOML file.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use greetings_engine::load_config;
///
/// let config = load_config(Path::new("greetings.toml")).unwrap();
/// println!("{} templates", config.templates.len());
/// ```
pub fn load_config(path: &Path) -> GreetingsResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        Box::new(GreetingsError::new(ErrorKind::FileError {
            path: path.to_path_buf(),
            source: e,
        }))
    })?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| greetings_base::err!("Failed to parse {}: {}", path.display(), e))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use std::io::Write;

    #[test]
    fn test_default_config_has_three_templates() {
        let config = Config::default();
        assert_eq!(config.templates.len(), 3);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_toml_templates() {
        let config: Config = toml::from_str(
            r#"
            templates = ["Ahoy, {name}!"]
            "#,
        )
        .unwrap();
        assert_eq!(config.templates, vec!["Ahoy, {name}!"]);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_toml_without_templates_falls_back_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.templates.len(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_set() {
        let config = Config { templates: vec![] };
        let err = config.validate().unwrap_err();
        expect!["template set must not be empty"].assert_eq(&err.to_string());
    }

    #[test]
    fn test_validate_rejects_template_without_slot() {
        let config = Config {
            templates: vec!["Hello there!".to_string()],
        };
        let err = config.validate().unwrap_err();
        expect!["Invalid template 'Hello there!': expected exactly one {name} placeholder"]
            .assert_eq(&err.to_string());
    }

    #[test]
    fn test_validate_rejects_template_with_two_slots() {
        let config = Config {
            templates: vec!["{name} and {name}".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"templates = ["Welcome back, {{name}}!"]"#).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.templates, vec!["Welcome back, {name}!"]);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("greetings.toml")).unwrap_err();
        match err.kind() {
            ErrorKind::FileError { path, .. } => {
                assert!(path.ends_with("greetings.toml"));
            }
            other => panic!("Expected FileError variant, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "templates = not-a-list").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
