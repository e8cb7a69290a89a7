//! Configuration Management Module for cmt
//!
//! This module handles the per-project preference file, including
//! - Reading and writing the preference file
//! - The convention enum stored inside it
//! - Handling configuration errors
//!
//! # Configuration Structure
//!
//! The preferences are stored as pretty-printed JSON at `.cmtrc.json` in the
//! working directory and record
//! - The commit convention to use (`conventional-commit` or `gitmoji`)
//! - Whether to uppercase the first letter of commit messages
//!
//! # Error Handling
//!
//! A missing file is reported as `ConfigError::NotConfigured` so callers can
//! fall back to guessing the convention; any other failure (malformed JSON,
//! unknown convention value) is fatal for the invocation.

use std::{fmt, fs, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Name of the preference file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = ".cmtrc.json";

/// The two commit message conventions cmt knows how to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionType {
    ConventionalCommit,
    Gitmoji,
}

impl ConventionType {
    /// The stable string form used in the preference file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ConventionType::ConventionalCommit => "conventional-commit",
            ConventionType::Gitmoji => "gitmoji",
        }
    }
}

impl fmt::Display for ConventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConventionType {
    type Err = ConfigError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "conventional-commit" => Ok(ConventionType::ConventionalCommit),
            "gitmoji" => Ok(ConventionType::Gitmoji),
            other => Err(ConfigError::UnsupportedConvention {
                value: other.to_string(),
            }),
        }
    }
}

/// The preference record stored in `.cmtrc.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub convention: ConventionType,
    pub uppercase: bool,
}

/// On-disk shape of the preference file. The convention is kept as a plain
/// string here so an unknown value surfaces as `UnsupportedConvention`
/// rather than a generic parse error.
#[derive(Serialize, Deserialize)]
struct RawConfig {
    convention: String,
    uppercase: bool,
}

/// Handle on the preference file for one working directory.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Creates a store rooted at the current working directory.
    #[must_use]
    pub fn new() -> Self {
        ConfigStore {
            root: PathBuf::from("."),
        }
    }

    /// Creates a store rooted at a custom directory.
    ///
    /// # Arguments
    /// * `root` - The directory containing (or that will contain) `.cmtrc.json`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        ConfigStore { root: root.into() }
    }

    /// Path of the preference file for this store.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Reads the preference record.
    ///
    /// # Errors
    /// * `ConfigError::NotConfigured` if the file does not exist
    /// * `ConfigError::Parse` if the file is not valid JSON
    /// * `ConfigError::UnsupportedConvention` if the convention value is unknown
    pub fn read(&self) -> Result<Config> {
        let config_file = self.config_file_path();

        if !config_file.exists() {
            return Err(ConfigError::NotConfigured.into());
        }

        let data = fs::read_to_string(&config_file).map_err(ConfigError::Io)?;
        let raw: RawConfig = serde_json::from_str(&data).map_err(ConfigError::Parse)?;
        let convention = raw.convention.parse::<ConventionType>()?;

        Ok(Config {
            convention,
            uppercase: raw.uppercase,
        })
    }

    /// Writes the preference record, replacing any existing file.
    ///
    /// The file is pretty-printed with two-space indentation so it stays
    /// readable when checked into a repository.
    ///
    /// # Errors
    /// * If serialization or the write itself fails
    pub fn write(&self, config: &Config) -> Result<()> {
        let raw = RawConfig {
            convention: config.convention.to_string(),
            uppercase: config.uppercase,
        };

        let data = serde_json::to_string_pretty(&raw).map_err(ConfigError::Parse)?;
        fs::write(self.config_file_path(), data).map_err(ConfigError::Io)?;

        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CmtError;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_root(temp_dir.path());

        let config = Config {
            convention: ConventionType::Gitmoji,
            uppercase: true,
        };

        store.write(&config).unwrap();
        assert_eq!(store.read().unwrap(), config);

        // Overwriting replaces the record entirely
        let replacement = Config {
            convention: ConventionType::ConventionalCommit,
            uppercase: false,
        };

        store.write(&replacement).unwrap();
        assert_eq!(store.read().unwrap(), replacement);
    }

    #[test]
    fn test_written_file_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_root(temp_dir.path());

        store
            .write(&Config {
                convention: ConventionType::ConventionalCommit,
                uppercase: false,
            })
            .unwrap();

        let content = fs::read_to_string(store.config_file_path()).unwrap();
        assert!(content.contains("  \"convention\": \"conventional-commit\""));
        assert!(content.contains("  \"uppercase\": false"));
    }

    #[test]
    fn test_read_missing_file_is_not_configured() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_root(temp_dir.path());

        assert!(matches!(
            store.read(),
            Err(CmtError::Config(ConfigError::NotConfigured))
        ));
    }

    #[test]
    fn test_read_unknown_convention() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_root(temp_dir.path());

        fs::write(
            store.config_file_path(),
            r#"{ "convention": "bogus", "uppercase": false }"#,
        )
        .unwrap();

        match store.read() {
            Err(CmtError::Config(ConfigError::UnsupportedConvention { value })) => {
                assert_eq!(value, "bogus");
            }
            other => panic!("expected UnsupportedConvention, got {other:?}"),
        }
    }

    #[test]
    fn test_read_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_root(temp_dir.path());

        fs::write(store.config_file_path(), "{ convention: nope").unwrap();

        assert!(matches!(
            store.read(),
            Err(CmtError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_convention_type_string_round_trip() {
        for convention in [ConventionType::ConventionalCommit, ConventionType::Gitmoji] {
            assert_eq!(
                convention.as_str().parse::<ConventionType>().unwrap(),
                convention
            );
        }

        assert!("emoji".parse::<ConventionType>().is_err());
    }
}
