//! Where configuration files live

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const USER_CONFIG_FILE: &str = "config.toml";
const PROJECT_CONFIG_FILE: &str = "ringlink.toml";
const LOCAL_CONFIG_FILE: &str = "ringlink.local.toml";

/// XDG-compliant locations of the Ringlink config files
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    /// Discover the user config directory through XDG
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("dev", "Ringlink", "ringlink"),
        }
    }

    /// `~/.config/ringlink/` on Linux
    pub fn user_config_dir(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                ConfigError::XdgError("no home directory to place user config in".to_string())
            })
    }

    /// `~/.config/ringlink/config.toml` on Linux
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.user_config_dir()?.join(USER_CONFIG_FILE))
    }

    /// Shared limits checked into the project (`ringlink.toml`)
    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_CONFIG_FILE)
    }

    /// Per-checkout overrides (`ringlink.local.toml`, gitignored)
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_CONFIG_FILE)
    }

    /// Config files that exist on disk, lowest precedence first.
    ///
    /// The user file is skipped when `include_user` is false or no home
    /// directory can be found.
    pub fn existing_layers(&self, project_dir: &Path, include_user: bool) -> Vec<PathBuf> {
        let user = if include_user {
            self.user_config_file().ok()
        } else {
            None
        };

        user.into_iter()
            .chain([
                Self::project_config_file(project_dir),
                Self::local_config_file(project_dir),
            ])
            .filter(|path| path.exists())
            .collect()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_xdg_paths() {
        let paths = Paths::new();

        // May be unavailable on minimal containers without a home directory
        if let Ok(config_file) = paths.user_config_file() {
            assert!(config_file.to_string_lossy().contains("ringlink"));
            assert!(config_file.ends_with(USER_CONFIG_FILE));
        }
    }

    #[test]
    fn test_project_file_names() {
        let project_dir = Path::new("/srv/app");

        assert_eq!(
            Paths::project_config_file(project_dir),
            project_dir.join("ringlink.toml")
        );
        assert_eq!(
            Paths::local_config_file(project_dir),
            project_dir.join("ringlink.local.toml")
        );
    }

    #[test]
    fn test_existing_layers_in_precedence_order() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();
        let paths = Paths::new();

        assert!(paths.existing_layers(project_dir, false).is_empty());

        let local = Paths::local_config_file(project_dir);
        std::fs::write(&local, "[queue]\nlimit = 7\n").expect("Failed to write local config");
        assert_eq!(paths.existing_layers(project_dir, false), vec![local.clone()]);

        let project = Paths::project_config_file(project_dir);
        std::fs::write(&project, "[queue]\nlimit = 4\n").expect("Failed to write project config");
        assert_eq!(
            paths.existing_layers(project_dir, false),
            vec![project, local]
        );
    }
}
