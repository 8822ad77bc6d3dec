//! Concrete implementations of the service traits.
//!
//! These implementations wrap the actual webforge installer, plugin
//! registry, and dialoguer prompts, adapting them to the trait interfaces
//! used by handlers.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

use webforge::catalog::PackageGroup;
use webforge::exec::ShellRunner;
use webforge::installer::{InstallError, NpmInstaller, PackageSpec};
use webforge::plugins::{PluginRegistry, SetupError, SetupOutcome};

use super::traits::{Output, PackageService, UserPrompts};
use crate::error::CliError;

// ============================================================================
// Console Output Implementation
// ============================================================================

/// Standard console output implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a new console output.
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn println(&self, message: &str) {
        println!("{}", message);
    }
}

// ============================================================================
// Dialoguer Prompts Implementation
// ============================================================================

/// Interactive prompts backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompts {
    theme: ColorfulTheme,
}

impl DialoguerPrompts {
    /// Create prompts with the default colorful theme.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserPrompts for DialoguerPrompts {
    fn package_query(&self) -> Result<String, CliError> {
        Input::with_theme(&self.theme)
            .with_prompt("Search packages (blank for all)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CliError::Prompt(format!("Input error: {}", e)))
    }

    fn choose_package(&self, candidates: &[&str]) -> Result<String, CliError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Select a package")
            .items(candidates)
            .default(0)
            .interact()
            .map_err(|e| CliError::Prompt(format!("Selection error: {}", e)))?;

        Ok(candidates[index].to_string())
    }

    fn choose_packages(&self, group: &PackageGroup) -> Result<Vec<String>, CliError> {
        let items: Vec<&str> = group.entries.iter().map(|entry| entry.name).collect();
        let defaults: Vec<bool> = group.entries.iter().map(|entry| entry.default_selected).collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(group.name)
            .items(&items)
            .defaults(&defaults)
            .interact()
            .map_err(|e| CliError::Prompt(format!("Selection error: {}", e)))?;

        Ok(picked.into_iter().map(|i| items[i].to_string()).collect())
    }
}

// ============================================================================
// Default Package Service Implementation
// ============================================================================

/// Default implementation of the package service.
///
/// Wraps a real installer spawning the configured package manager, plus
/// the built-in plugin registry.
pub struct DefaultPackageService {
    installer: NpmInstaller<ShellRunner>,
    registry: PluginRegistry,
}

impl DefaultPackageService {
    /// Create a service invoking the given package manager binary.
    pub fn new(package_manager: &str) -> Self {
        Self {
            installer: NpmInstaller::with_manager(ShellRunner, package_manager),
            registry: PluginRegistry::new(),
        }
    }
}

impl PackageService for DefaultPackageService {
    fn install_packages(
        &self,
        specs: &[PackageSpec],
        project_dir: &Path,
    ) -> Result<(), InstallError> {
        self.installer.install(specs, project_dir)
    }

    fn setup_package(
        &self,
        package: &str,
        project_dir: &Path,
    ) -> Result<SetupOutcome, SetupError> {
        self.registry.setup(package, project_dir)
    }
}
