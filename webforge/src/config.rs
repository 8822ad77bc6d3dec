//! Configuration file handling for `~/.webforge/config.ini`.
//!
//! Loads and saves user configuration with sensible defaults. Every
//! setting is optional in the file; missing keys fall back to the
//! defaults below, and a missing file yields the default configuration.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read the config file.
    #[error("failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the config file.
    #[error("failed to write config file: {0}")]
    Write(String),

    /// Failed to create the config directory.
    #[error("failed to create config directory: {0}")]
    Directory(std::io::Error),
}

/// Install-related settings (`[install]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSettings {
    /// Package manager binary invoked for batch installs.
    pub package_manager: String,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            package_manager: "npm".to_string(),
        }
    }
}

/// Project layout settings (`[project]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Directory name used for scaffolded frontends.
    pub frontend_dir: String,
    /// Directory name used for scaffolded backends.
    pub backend_dir: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            frontend_dir: "frontend".to_string(),
            backend_dir: "backend".to_string(),
        }
    }
}

/// Logging settings (`[logging]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Path of the session log file.
    pub file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join("logs").join("webforge.log"),
        }
    }
}

/// User configuration backed by `~/.webforge/config.ini`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub install: InstallSettings,
    pub project: ProjectSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load configuration from the default path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("install")) {
            if let Some(manager) = section.get("package_manager") {
                config.install.package_manager = manager.to_string();
            }
        }

        if let Some(section) = ini.section(Some("project")) {
            if let Some(dir) = section.get("frontend_dir") {
                config.project.frontend_dir = dir.to_string();
            }
            if let Some(dir) = section.get("backend_dir") {
                config.project.backend_dir = dir.to_string();
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(file) = section.get("file") {
                config.logging.file = PathBuf::from(file);
            }
        }

        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::Directory)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("install"))
            .set("package_manager", self.install.package_manager.as_str());
        ini.with_section(Some("project"))
            .set("frontend_dir", self.project.frontend_dir.as_str())
            .set("backend_dir", self.project.backend_dir.as_str());
        ini.with_section(Some("logging"))
            .set("file", self.logging.file.display().to_string());

        ini.write_to_file(path)
            .map_err(|e| ConfigFileError::Write(e.to_string()))
    }
}

/// Path to the config directory (`~/.webforge`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".webforge")
}

/// Path to the config file (`~/.webforge/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.install.package_manager, "npm");
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.install.package_manager = "pnpm".to_string();
        config.project.frontend_dir = "web".to_string();
        config.save_to(&path).unwrap();

        let reloaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(reloaded.install.package_manager, "pnpm");
        assert_eq!(reloaded.project.frontend_dir, "web");
        assert_eq!(reloaded.project.backend_dir, "backend");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[install]\npackage_manager = yarn\n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.install.package_manager, "yarn");
        assert_eq!(config.project, ProjectSettings::default());
    }
}
