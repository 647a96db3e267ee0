//! Configuration loader with multi-source merging

use crate::{ConfigError, Paths, RinglinkConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    /// Variables read instead of the process environment when set.
    env_source: Option<config::Map<String, String>>,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "RINGLINK".to_string(),
            env_source: None,
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "RINGLINK")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read `PREFIX_*` variables from `vars` instead of the process environment
    pub fn with_env_source<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_source = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Skip ~/.config/ringlink/config.toml (keeps tests hermetic)
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<RinglinkConfig, ConfigError> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = RinglinkConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2-4. User, project and local files, lowest precedence first
        for path in Paths::new().existing_layers(&self.project_dir, self.include_user_config) {
            tracing::debug!(path = %path.display(), "loading config layer");
            builder = builder.add_source(
                config::File::from(path)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (RINGLINK_*)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("_")
                .try_parsing(true)
                .source(self.env_source),
        );

        // Build, deserialize and check the limits
        let ringlink_config: RinglinkConfig = builder.build()?.try_deserialize()?;
        ringlink_config.validate()?;

        Ok(ringlink_config)
    }

    /// Load configuration or return defaults if loading fails
    pub fn load_or_default(self) -> RinglinkConfig {
        self.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "falling back to default configuration");
            RinglinkConfig::default()
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Backing;
    use std::fs;
    use tempfile::tempdir;

    fn loader_for(project_dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("RINGLINK_TEST_UNSET")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader_for(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config, RinglinkConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[queue]
limit = 5

[stack]
limit = 20
backing = "linked-list"
"#;
        fs::write(project_dir.join("ringlink.toml"), config_content)
            .expect("Failed to write config");

        let config = loader_for(project_dir)
            .load()
            .expect("Failed to load config");

        assert_eq!(config.queue.limit, 5);
        assert_eq!(config.queue.backing, Backing::Array);
        assert_eq!(config.stack.limit, 20);
        assert_eq!(config.stack.backing, Backing::LinkedList);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("ringlink.toml"),
            r#"
[queue]
limit = 5
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("ringlink.local.toml"),
            r#"
[queue]
limit = 7
"#,
        )
        .expect("Failed to write local config");

        let config = loader_for(project_dir)
            .load()
            .expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.queue.limit, 7);
    }

    #[test]
    fn test_env_overrides_files() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();
        fs::write(project_dir.join("ringlink.toml"), "[queue]\nlimit = 5\n")
            .expect("Failed to write project config");
        fs::write(
            project_dir.join("ringlink.local.toml"),
            "[queue]\nlimit = 7\n\n[stack]\nlimit = 12\n",
        )
        .expect("Failed to write local config");

        let config = loader_for(project_dir)
            .with_env_prefix("RINGLINK")
            .with_env_source([
                ("RINGLINK_QUEUE_LIMIT", "9"),
                ("RINGLINK_STACK_BACKING", "linked-list"),
                ("OTHER_QUEUE_LIMIT", "1"),
            ])
            .load()
            .expect("Failed to load config");

        assert_eq!(config.queue.limit, 9);
        assert_eq!(config.stack.limit, 12);
        assert_eq!(config.stack.backing, Backing::LinkedList);
    }

    #[test]
    fn test_env_limit_is_validated() {
        let temp_dir = tempdir().expect("Failed to create temp dir");

        let result = loader_for(temp_dir.path())
            .with_env_prefix("RINGLINK")
            .with_env_source([("RINGLINK_STACK_LIMIT", "0")])
            .load();

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_limit_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();
        fs::write(project_dir.join("ringlink.toml"), "[queue]\nlimit = 0\n")
            .expect("Failed to write config");

        let result = loader_for(project_dir).load();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let fallback = loader_for(project_dir).load_or_default();
        assert_eq!(fallback, RinglinkConfig::default());
    }
}
