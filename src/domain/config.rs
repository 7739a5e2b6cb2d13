use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    GeneratorOptions,
    generator::RepeatedPlaceholders,
    storage::{DEFAULT_CAPACITY, DEFAULT_KEY},
};

/// Configuration for idea generation and the favourites store.
///
/// Every setting has a default, so an empty (or missing) configuration file
/// behaves exactly like the web application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The maximum number of favourites kept.
    ///
    /// Saving or importing beyond this drops the oldest entries (by position,
    /// not timestamp).
    capacity: NonZeroUsize,

    /// The key of the storage slot holding the favourites.
    storage_key: String,

    /// A JSON file of genre templates replacing the built-in ones.
    ///
    /// Relative paths are resolved against the repository root.
    templates: Option<PathBuf>,

    /// How a placeholder that appears more than once in a title pattern is
    /// filled.
    pub repeated_placeholders: RepeatedPlaceholders,

    /// The options used for any generation setting not given explicitly.
    pub defaults: GeneratorOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            storage_key: default_storage_key(),
            templates: None,
            repeated_placeholders: RepeatedPlaceholders::default(),
            defaults: GeneratorOptions::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the maximum number of favourites kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the key of the favourites storage slot.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the configured template file, if any.
    #[must_use]
    pub fn templates(&self) -> Option<&Path> {
        self.templates.as_deref()
    }

    /// Sets the template file used instead of the built-in templates.
    pub fn set_templates(&mut self, path: Option<PathBuf>) {
        self.templates = path;
    }
}

const fn default_capacity() -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(DEFAULT_CAPACITY - 1)
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_capacity")]
        capacity: NonZeroUsize,

        #[serde(default = "default_storage_key")]
        storage_key: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        templates: Option<PathBuf>,

        #[serde(default)]
        repeated_placeholders: RepeatedPlaceholders,

        #[serde(default)]
        defaults: GeneratorOptions,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                capacity,
                storage_key,
                templates,
                repeated_placeholders,
                defaults,
            } => Self {
                capacity,
                storage_key,
                templates,
                repeated_placeholders,
                defaults,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            capacity: config.capacity,
            storage_key: config.storage_key,
            templates: config.templates,
            repeated_placeholders: config.repeated_placeholders,
            defaults: config.defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{BookType, Tone};

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
_version = "1"
capacity = 25
storage_key = "shelf"
templates = "my-templates.json"
repeated_placeholders = "first-only"

[defaults]
book_type = "non-fiction"
genre = "business"
tone = "serious"
"#,
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.capacity(), 25);
        assert_eq!(config.storage_key(), "shelf");
        assert_eq!(config.templates(), Some(Path::new("my-templates.json")));
        assert_eq!(config.repeated_placeholders, RepeatedPlaceholders::FirstOnly);
        assert_eq!(config.defaults.book_type, BookType::NonFiction);
        assert_eq!(config.defaults.genre, "business");
        assert_eq!(config.defaults.tone, Tone::Serious);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ncapacity = \"lots\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ncapacity = 0\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"), "{error}");
    }

    #[test]
    fn default_capacity_matches_store() {
        assert_eq!(Config::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let mut config = Config::default();
        config.set_templates(Some(PathBuf::from("templates.json")));
        config.defaults.tone = Tone::Dark;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
