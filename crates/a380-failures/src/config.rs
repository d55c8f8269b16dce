//! Configuration for the `a380fail` binary.
//!
//! Settings only affect how the catalog is presented; the failure tables
//! themselves are compiled in and cannot be configured.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::definition::Chapter;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir holding the config file.
const CONFIG_DIR_NAME: &str = "a380-failures";

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "A380_FAILURES_";

/// Application configuration.
///
/// Loaded from (highest precedence first):
/// 1. Environment variables prefixed with `A380_FAILURES_`
///    with `__` between sections (e.g. `A380_FAILURES_OUTPUT__FORMAT=json`)
/// 2. TOML file at `<config dir>/a380-failures/config.toml`
/// 3. Defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What the catalog listing includes.
    pub catalog: CatalogConfig,
    /// How results are printed.
    pub output: OutputConfig,
}

/// Catalog listing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Also list named failures that are not selectable.
    pub show_unselectable: bool,
    /// Chapters listed when none is given on the command line.
    /// Empty means all chapters.
    pub chapters: Vec<u32>,
}

/// Output options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One record per line.
    #[default]
    Plain,
    /// Aligned columns with a header.
    Table,
    /// JSON array.
    Json,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: Config = Self::base()
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate exactly one config file, ignoring the environment.
    ///
    /// Unlike [`Config::load_from`], the file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read, or a parse or
    /// validation error.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = Self::base().merge(Toml::string(&contents)).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a chapter is listed twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for chapter in &self.catalog.chapters {
            if !seen.insert(chapter) {
                return Err(Error::ConfigValidation {
                    message: format!("chapter {chapter} is listed more than once"),
                });
            }
        }
        Ok(())
    }

    /// Default chapter filter as typed chapters.
    #[must_use]
    pub fn chapters(&self) -> Vec<Chapter> {
        self.catalog.chapters.iter().copied().map(Chapter::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(!config.catalog.show_unselectable);
        assert!(config.catalog.chapters.is_empty());
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn test_validate_valid_config() {
        let mut config = Config::default();
        config.catalog.chapters = vec![22, 32];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_chapter() {
        let mut config = Config::default();
        config.catalog.chapters = vec![22, 29, 22];

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("chapter 22"));
    }

    #[test]
    fn test_chapters_typed() {
        let mut config = Config::default();
        config.catalog.chapters = vec![34, 22];
        assert_eq!(config.chapters(), vec![Chapter::new(34), Chapter::new(22)]);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("a380-failures"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_strict_missing_file() {
        let err = Config::load_strict(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_load_strict_parses_file() {
        let path = std::env::temp_dir().join(format!(
            "a380-failures-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[catalog]\nshow_unselectable = true\nchapters = [32]\n\n[output]\nformat = \"table\"\n",
        )
        .unwrap();

        let result = Config::load_strict(&path);
        std::fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert!(config.catalog.show_unselectable);
        assert_eq!(config.catalog.chapters, vec![32]);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_load_strict_rejects_invalid() {
        let path = std::env::temp_dir().join(format!(
            "a380-failures-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[catalog]\nchapters = [22, 22]\n").unwrap();

        let result = Config::load_strict(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_output_format_serialize() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, r#""json""#);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let json = r#"{"output": {"format": "table"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(!config.catalog.show_unselectable);
    }
}
