//! Package selection, install, and configuration commands.
//!
//! This module implements the Command Pattern with trait-based dependency
//! injection, providing a clean separation of concerns:
//!
//! - `traits`: Core interfaces (`Output`, `UserPrompts`, `PackageService`)
//! - `services`: Concrete implementations of the traits
//! - `args`: Handler argument types
//! - `handlers`: Command handlers implementing business logic
//!
//! # Architecture
//!
//! Each command handler:
//! - Implements the `CommandHandler` trait
//! - Depends only on trait interfaces via `CommandContext`
//! - Can be tested in isolation with mock implementations

mod args;
mod handlers;
mod services;
mod traits;


// Re-export public types
pub use handlers::{AddHandler, InitHandler};
pub use services::{ConsoleOutput, DefaultPackageService, DialoguerPrompts};
pub use traits::CommandHandler;

use std::env;
use std::path::PathBuf;

use args::{AddArgs, InitArgs};
use traits::CommandContext;
use webforge::config::ConfigFile;

use crate::error::CliError;

/// Resolve the project directory a package command operates on.
///
/// Priority: explicit `--dir` flag, then the current working directory.
fn project_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Run the `init` command with production services.
pub fn run_init(config: &ConfigFile, dir: Option<PathBuf>) -> Result<(), CliError> {
    let output = ConsoleOutput::new();
    let service = DefaultPackageService::new(&config.install.package_manager);
    let prompts = DialoguerPrompts::new();
    let ctx = CommandContext::new(&output, &service, &prompts);

    InitHandler::execute(
        InitArgs {
            project_dir: project_dir(dir),
        },
        &ctx,
    )
}

/// Run the `add` command with production services.
pub fn run_add(config: &ConfigFile, dir: Option<PathBuf>) -> Result<(), CliError> {
    let output = ConsoleOutput::new();
    let service = DefaultPackageService::new(&config.install.package_manager);
    let prompts = DialoguerPrompts::new();
    let ctx = CommandContext::new(&output, &service, &prompts);

    AddHandler::execute(
        AddArgs {
            project_dir: project_dir(dir),
        },
        &ctx,
    )
}
