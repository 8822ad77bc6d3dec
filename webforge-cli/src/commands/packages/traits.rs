//! Core traits for the packages command handler pattern.
//!
//! This module defines the interfaces that handlers depend on, enabling
//! dependency injection and testability.

use std::path::Path;

use webforge::catalog::PackageGroup;
use webforge::installer::{InstallError, PackageSpec};
use webforge::plugins::{SetupError, SetupOutcome};

use crate::error::CliError;

// ============================================================================
// Output Trait - Abstracts console output
// ============================================================================

/// Trait for outputting messages to the user.
///
/// This abstraction allows handlers to produce output without depending on
/// `println!` directly, making them testable.
pub trait Output: Send + Sync {
    /// Print a line of text.
    fn println(&self, message: &str);

    /// Print an empty line.
    fn newline(&self) {
        self.println("");
    }

    /// Print a section header.
    fn header(&self, title: &str) {
        self.println(title);
        self.println(&"=".repeat(title.len()));
    }

    /// Print an indented line.
    fn indented(&self, message: &str) {
        self.println(&format!("  {}", message));
    }

    /// Print a warning message.
    #[allow(dead_code)]
    fn warning(&self, message: &str) {
        self.println(&format!("Warning: {}", message));
    }

    /// Print a success message.
    fn success(&self, message: &str) {
        self.println(&format!("Success: {}", message));
    }
}

// ============================================================================
// User Prompts Trait
// ============================================================================

/// Trait for interactive prompts.
pub trait UserPrompts: Send + Sync {
    /// Ask for a free-text search query. An empty string means "show all".
    fn package_query(&self) -> Result<String, CliError>;

    /// Pick one package from a candidate list.
    fn choose_package(&self, candidates: &[&str]) -> Result<String, CliError>;

    /// Pick any number of packages from a group's checkbox prompt.
    fn choose_packages(&self, group: &PackageGroup) -> Result<Vec<String>, CliError>;
}

// ============================================================================
// Package Service Trait
// ============================================================================

/// Trait for package install and configuration operations.
///
/// Abstracts the installer and plugin registry to allow mocking in tests.
pub trait PackageService: Send + Sync {
    /// Install the given specifiers as one batch in `project_dir`.
    fn install_packages(
        &self,
        specs: &[PackageSpec],
        project_dir: &Path,
    ) -> Result<(), InstallError>;

    /// Run the configuration plugin for `package`, if one is registered.
    fn setup_package(&self, package: &str, project_dir: &Path)
        -> Result<SetupOutcome, SetupError>;
}

// ============================================================================
// Command Context - Bundles dependencies for handlers
// ============================================================================

/// Context providing dependencies to command handlers.
///
/// In production this holds real implementations; in tests, mocks.
pub struct CommandContext<'a> {
    /// Output interface for user messages.
    pub output: &'a dyn Output,

    /// Install and plugin operations.
    pub service: &'a dyn PackageService,

    /// Interactive prompts.
    pub prompts: &'a dyn UserPrompts,
}

impl<'a> CommandContext<'a> {
    /// Create a new command context.
    pub fn new(
        output: &'a dyn Output,
        service: &'a dyn PackageService,
        prompts: &'a dyn UserPrompts,
    ) -> Self {
        Self {
            output,
            service,
            prompts,
        }
    }
}

// ============================================================================
// Command Handler Trait
// ============================================================================

/// Trait for command handlers.
///
/// Each subcommand has a handler that implements this trait. Handlers
/// receive their arguments and a context providing dependencies.
pub trait CommandHandler {
    /// The arguments type for this handler.
    type Args;

    /// Execute the command with the given arguments and context.
    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError>;
}
