//! Command handlers for the package commands.
//!
//! Each handler implements the `CommandHandler` trait and contains the
//! business logic for its respective command.

use tracing::info;

use webforge::catalog::{groups, Catalog};
use webforge::installer::PackageSpec;
use webforge::plugins::SetupOutcome;

use super::args::{AddArgs, InitArgs};
use super::traits::{CommandContext, CommandHandler};
use crate::error::CliError;

// ============================================================================
// Init Handler
// ============================================================================

/// Handler for the `init` command.
///
/// Walks the package groups one checkbox prompt at a time, installs the
/// combined selection as a single batch, then runs the configuration
/// plugin for each selected package in selection order.
pub struct InitHandler;

impl CommandHandler for InitHandler {
    type Args = InitArgs;

    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError> {
        ctx.output.header("Select packages to install");
        ctx.output.newline();

        let mut selection: Vec<String> = Vec::new();
        for group in groups() {
            for package in ctx.prompts.choose_packages(group)? {
                // Dedupe while preserving first-selection order.
                if !selection.iter().any(|existing| existing == &package) {
                    selection.push(package);
                }
            }
        }

        if selection.is_empty() {
            info!("no packages selected, nothing to install");
            ctx.output.newline();
            ctx.output.println("No packages selected.");
            return Ok(());
        }

        install_and_configure(&selection, &args.project_dir, ctx)?;

        ctx.output.newline();
        ctx.output
            .success(&format!("{} package(s) installed.", selection.len()));
        Ok(())
    }
}

// ============================================================================
// Add Handler
// ============================================================================

/// Handler for the `add` command.
///
/// Fuzzy-searches the catalogue with the user's query, lets them pick one
/// match, then installs and configures it.
pub struct AddHandler;

impl CommandHandler for AddHandler {
    type Args = AddArgs;

    fn execute(args: Self::Args, ctx: &CommandContext<'_>) -> Result<(), CliError> {
        let query = ctx.prompts.package_query()?;

        let catalog = Catalog::new();
        let candidates = catalog.search(&query);

        if candidates.is_empty() {
            info!(%query, "no catalogue packages matched the query");
            ctx.output
                .println(&format!("No packages match '{}'.", query.trim()));
            return Ok(());
        }

        let package = ctx.prompts.choose_package(&candidates)?;
        let selection = [package];

        install_and_configure(&selection, &args.project_dir, ctx)?;

        ctx.output.newline();
        ctx.output.success(&format!("{} installed.", selection[0]));
        Ok(())
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Install `selection` as one batch, then run each package's plugin in
/// selection order. The first failure aborts; later packages are not
/// configured after a failed install.
fn install_and_configure<S: AsRef<str>>(
    selection: &[S],
    project_dir: &std::path::Path,
    ctx: &CommandContext<'_>,
) -> Result<(), CliError> {
    let specs: Vec<PackageSpec> = selection
        .iter()
        .map(|package| PackageSpec::for_package(package.as_ref()))
        .collect();

    ctx.output.newline();
    ctx.output.println("Installing:");
    for spec in &specs {
        ctx.output.indented(&spec.to_string());
    }
    ctx.output.newline();

    ctx.service.install_packages(&specs, project_dir)?;

    for package in selection {
        let package = package.as_ref();
        match ctx.service.setup_package(package, project_dir)? {
            SetupOutcome::Configured => {
                ctx.output.indented(&format!("Configured {}", package));
            }
            SetupOutcome::AlreadyConfigured => {
                ctx.output
                    .indented(&format!("{} already configured, left as-is", package));
            }
            SetupOutcome::NoPlugin => {}
        }
    }

    Ok(())
}
