//! `create` command: scaffold a new project.
//!
//! Creates a backend, a frontend, or both (a monorepo) under the current
//! directory, then hands the frontend over to the package selection flow.

use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::info;

use webforge::config::ConfigFile;
use webforge::exec::ShellRunner;
use webforge::scaffold::backend::{self, BackendKind};
use webforge::scaffold::frontend::{clean_template, create_react_app, ensure_effectively_empty};

use crate::commands::packages;
use crate::error::CliError;

/// Which half of the project to create.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ComponentArg {
    /// Backend only
    Backend,
    /// Frontend only
    Frontend,
}

/// Run the `create` command.
///
/// With no argument, asks whether to create a monorepo, a backend, or a
/// frontend.
pub fn run(config: &ConfigFile, component: Option<ComponentArg>) -> Result<(), CliError> {
    let base = env::current_dir().map_err(|e| CliError::Config(e.to_string()))?;
    let theme = ColorfulTheme::default();

    match component {
        Some(ComponentArg::Backend) => create_backend(config, &base, &theme),
        Some(ComponentArg::Frontend) => create_frontend(config, &base, &theme),
        None => {
            let choices = ["Monorepo (backend + frontend)", "Backend only", "Frontend only"];
            let selection = Select::with_theme(&theme)
                .with_prompt("What do you want to create?")
                .items(&choices)
                .default(0)
                .interact()
                .map_err(|e| CliError::Prompt(format!("Selection error: {}", e)))?;

            match selection {
                0 => {
                    create_backend(config, &base, &theme)?;
                    create_frontend(config, &base, &theme)
                }
                1 => create_backend(config, &base, &theme),
                _ => create_frontend(config, &base, &theme),
            }
        }
    }
}

/// True if the directory exists and holds anything at all.
fn occupied(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

fn create_backend(
    config: &ConfigFile,
    base: &Path,
    theme: &ColorfulTheme,
) -> Result<(), CliError> {
    let dir = base.join(&config.project.backend_dir);

    if occupied(&dir) {
        println!(
            "{} {} already exists, skipping backend creation",
            style("!").yellow(),
            dir.display()
        );
        return Ok(());
    }

    let selection = Select::with_theme(theme)
        .with_prompt("Backend technology")
        .items(&BackendKind::ALL)
        .default(0)
        .interact()
        .map_err(|e| CliError::Prompt(format!("Selection error: {}", e)))?;
    let kind = BackendKind::ALL[selection];

    println!("Creating {} backend in {}", kind, dir.display());
    backend::scaffold(kind, &dir, &ShellRunner)?;

    info!(%kind, dir = %dir.display(), "backend created");
    println!("{} Backend ready: {}", style("✓").green(), dir.display());
    Ok(())
}

fn create_frontend(
    config: &ConfigFile,
    base: &Path,
    _theme: &ColorfulTheme,
) -> Result<(), CliError> {
    let dir = base.join(&config.project.frontend_dir);

    if occupied(&dir) {
        println!(
            "{} {} already exists, skipping frontend creation",
            style("!").yellow(),
            dir.display()
        );
        return Ok(());
    }

    std::fs::create_dir_all(&dir).map_err(|error| CliError::FileWrite {
        path: dir.display().to_string(),
        error,
    })?;
    ensure_effectively_empty(&dir)?;

    println!("Creating React frontend in {}", dir.display());
    create_react_app(&dir, &ShellRunner)?;

    println!("Replacing the stock template...");
    let report = clean_template(&dir)?;
    info!(
        removed = report.removed.len(),
        written = report.written.len(),
        "template cleaned"
    );

    // Hand over to the package selection flow for the new frontend.
    println!();
    packages::run_init(config, Some(dir.clone()))?;

    println!("{} Frontend ready: {}", style("✓").green(), dir.display());
    Ok(())
}
