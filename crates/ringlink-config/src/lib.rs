//! Configuration management for Ringlink
//!
//! Container limits and backing choices are loaded from multiple sources:
//! 1. Environment variables (RINGLINK_* prefix, highest precedence)
//! 2. ringlink.local.toml (gitignored, local overrides)
//! 3. ringlink.toml (git-tracked, project config)
//! 4. ~/.config/ringlink/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Ringlink configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RinglinkConfig {
    pub queue: QueueConfig,
    pub stack: StackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum number of values an array-backed queue accepts.
    pub limit: usize,
    pub backing: Backing,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            backing: Backing::Array,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Maximum number of values an array-backed stack accepts.
    pub limit: usize,
    pub backing: Backing,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            backing: Backing::Array,
        }
    }
}

/// Storage behind a queue or stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Backing {
    /// Fixed-capacity buffer; inserts beyond the limit are rejected.
    Array,
    /// Doubly linked list; never full, `limit` is ignored.
    LinkedList,
}

impl RinglinkConfig {
    /// Parse a single TOML document, filling gaps with defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse one TOML file, without layering
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&source).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration backed entirely by linked lists
    pub fn unbounded() -> Self {
        Self {
            queue: QueueConfig {
                backing: Backing::LinkedList,
                ..Default::default()
            },
            stack: StackConfig {
                backing: Backing::LinkedList,
                ..Default::default()
            },
        }
    }

    /// Reject limits that would produce containers unable to hold anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.limit == 0 {
            return Err(ConfigError::ValidationError(
                "queue.limit must be at least 1".to_string(),
            ));
        }
        if self.stack.limit == 0 {
            return Err(ConfigError::ValidationError(
                "stack.limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = RinglinkConfig::default();
        assert_eq!(config.queue.limit, 3);
        assert_eq!(config.stack.limit, 10);
        assert_eq!(config.queue.backing, Backing::Array);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unbounded_config() {
        let config = RinglinkConfig::unbounded();
        assert_eq!(config.queue.backing, Backing::LinkedList);
        assert_eq!(config.stack.backing, Backing::LinkedList);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RinglinkConfig::from_toml_str(
            r#"
[queue]
limit = 8
backing = "linked-list"
"#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.queue.limit, 8);
        assert_eq!(config.queue.backing, Backing::LinkedList);
        assert_eq!(config.stack, StackConfig::default());
    }

    #[test_case("[queue]\nlimit = 0\n", "queue.limit"; "zero queue limit")]
    #[test_case("[stack]\nlimit = 0\n", "stack.limit"; "zero stack limit")]
    fn test_zero_limits_rejected(source: &str, field: &str) {
        match RinglinkConfig::from_toml_str(source) {
            Err(ConfigError::ValidationError(message)) => assert!(message.contains(field)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = RinglinkConfig::from_toml_str("[queue]\nlimit = \"three\"\n");
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_unknown_backing_rejected() {
        let result = RinglinkConfig::from_toml_str("[stack]\nbacking = \"tree\"\n");
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_from_file_reports_path() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[queue\n").expect("Failed to write config");

        match RinglinkConfig::from_file(&path) {
            Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            RinglinkConfig::from_file(&missing),
            Err(ConfigError::ReadError { .. })
        ));
    }
}
