//! CLI configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mutscope_core::ResolveOptions;
use serde::Deserialize;
use tracing::info;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mutscope.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub resolve: ResolveConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    pub custom_mutation_ui: bool,
    pub tracker_upgrades: bool,
    /// Tables file; relative paths are resolved against the config file
    pub tables: Option<PathBuf>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        let options = ResolveOptions::default();
        Self {
            custom_mutation_ui: options.custom_mutation_ui,
            tracker_upgrades: options.tracker_upgrades,
            tables: None,
        }
    }
}

impl ResolveConfig {
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions::new(self.custom_mutation_ui, self.tracker_upgrades)
    }
}

impl Config {
    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        if let (Some(tables), Some(dir)) = (&config.resolve.tables, path.parent()) {
            if tables.is_relative() {
                config.resolve.tables = Some(dir.join(tables));
            }
        }

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the given config file, or the default one if it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.resolve.options(), ResolveOptions::default());
        assert!(config.resolve.tables.is_none());
    }

    #[test]
    fn test_parse_resolve_section() {
        let config = Config::parse(
            r#"
[resolve]
custom_mutation_ui = false
tracker_upgrades = true
tables = "tables.json"
"#,
        )
        .unwrap();
        assert_eq!(config.resolve.options(), ResolveOptions::new(false, true));
        assert_eq!(config.resolve.tables, Some(PathBuf::from("tables.json")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("[resolve]\nrandom = true\n").is_err());
    }

    #[test]
    fn test_load_resolves_relative_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mutscope.toml");
        fs::write(&path, "[resolve]\ntables = \"data/tables.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.resolve.tables,
            Some(dir.path().join("data/tables.json"))
        );
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        assert!(Config::discover(Some(Path::new("/nonexistent/mutscope.toml"))).is_err());
    }
}
