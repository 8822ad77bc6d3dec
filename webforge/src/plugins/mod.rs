//! Post-install configuration plugins.
//!
//! A plugin is a registered capability that generates configuration
//! files for one specific package after it has been installed. The
//! registry is built once at startup and keyed by package name; most
//! catalogue packages have no entry, and that absence is an expected,
//! silently-handled state rather than an error.
//!
//! Every plugin is idempotent: before writing a file it checks whether
//! a non-empty version already exists at the expected path, and skips
//! the write instead of overwriting silently. Running a plugin twice
//! against the same directory leaves the same files as running it once.

mod eslint;
mod motion;
mod prettier;
mod tailwind;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub use eslint::EslintPlugin;
pub use motion::MotionPlugin;
pub use prettier::PrettierPlugin;
pub use tailwind::TailwindPlugin;

/// Errors from inside a single plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Failed to write a generated file.
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Failed to create a directory for generated files.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}

/// A plugin failure, tagged with the package it was configuring.
///
/// Plugins never crash the process directly; the caller decides
/// whether to abort the batch.
#[derive(Debug, Error)]
#[error("failed to configure {package}: {source}")]
pub struct SetupError {
    pub package: String,
    #[source]
    pub source: PluginError,
}

/// Result of a setup dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The plugin wrote at least one configuration file.
    Configured,
    /// Every expected output already existed; nothing was written.
    AlreadyConfigured,
    /// No plugin is registered for the package; trivial success.
    NoPlugin,
}

/// Capability to configure one package in a target directory.
///
/// New packages gain configuration support by implementing this trait
/// and registering in [`PluginRegistry::new`]; the dispatch logic never
/// changes.
pub trait PackageConfigurer: Send + Sync {
    /// The package name this plugin configures (registry key).
    fn package(&self) -> &'static str;

    /// Perform idempotent file-system configuration under `target_dir`.
    fn configure(&self, target_dir: &Path) -> Result<SetupOutcome, PluginError>;
}

/// Registry mapping package names to their configuration plugins.
///
/// Constructed once at startup; the set of configurable packages is
/// closed and inspectable via [`PluginRegistry::packages`].
pub struct PluginRegistry {
    plugins: Vec<Box<dyn PackageConfigurer>>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    /// The standard registry: Tailwind CSS, ESLint, Prettier and the
    /// animation library.
    pub fn new() -> Self {
        Self {
            plugins: vec![
                Box::new(TailwindPlugin),
                Box::new(EslintPlugin),
                Box::new(PrettierPlugin),
                Box::new(MotionPlugin),
            ],
        }
    }

    /// An empty registry (every setup is a no-op). Useful in tests.
    pub fn empty() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Names of all packages with a registered plugin.
    pub fn packages(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.package()).collect()
    }

    /// Configure `package` under `target_dir`.
    ///
    /// Lookup is exact-match and does not require catalogue membership.
    /// An unregistered name succeeds trivially with
    /// [`SetupOutcome::NoPlugin`].
    pub fn setup(&self, package: &str, target_dir: &Path) -> Result<SetupOutcome, SetupError> {
        let Some(plugin) = self.plugins.iter().find(|p| p.package() == package) else {
            info!(package, "no configuration plugin registered");
            return Ok(SetupOutcome::NoPlugin);
        };

        info!(package, dir = %target_dir.display(), "configuring package");
        plugin
            .configure(target_dir)
            .map_err(|source| SetupError {
                package: package.to_string(),
                source,
            })
    }
}

/// Whether a previous run already produced this file.
///
/// "Configured" means the file exists and is non-empty; an empty file
/// is treated as a broken partial write and rewritten.
pub(crate) fn already_written(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Write `contents` to `path` unless a non-empty file is already there.
///
/// Returns whether a write happened.
pub(crate) fn write_unless_present(path: &Path, contents: &str) -> Result<bool, PluginError> {
    if already_written(path) {
        info!(path = %path.display(), "already configured, skipping");
        return Ok(false);
    }

    fs::write(path, contents).map_err(|source| PluginError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote configuration file");
    Ok(true)
}

/// Ensure a directory exists, creating parents as needed.
pub(crate) fn ensure_dir(path: &Path) -> Result<(), PluginError> {
    fs::create_dir_all(path).map_err(|source| PluginError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Collapse per-file write results into a plugin outcome.
pub(crate) fn outcome(wrote_any: bool) -> SetupOutcome {
    if wrote_any {
        SetupOutcome::Configured
    } else {
        SetupOutcome::AlreadyConfigured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unregistered_package_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let registry = PluginRegistry::new();

        let result = registry.setup("lodash", dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::NoPlugin);
        // Nothing was written.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn registry_is_inspectable() {
        let registry = PluginRegistry::new();
        let packages = registry.packages();
        assert!(packages.contains(&"tailwindcss"));
        assert!(packages.contains(&"eslint"));
        assert!(packages.contains(&"prettier"));
        assert!(packages.contains(&"framer-motion"));
    }

    #[test]
    fn lookup_does_not_require_catalog_membership() {
        // "eslint" is registered but is not a catalogue entry.
        let catalog = crate::catalog::Catalog::new();
        assert!(!catalog.contains("eslint"));

        let dir = TempDir::new().unwrap();
        let result = PluginRegistry::new().setup("eslint", dir.path()).unwrap();
        assert_eq!(result, SetupOutcome::Configured);
    }

    #[test]
    fn empty_file_counts_as_not_configured() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stub.json");
        fs::write(&path, "").unwrap();
        assert!(!already_written(&path));

        assert!(write_unless_present(&path, "{}").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
