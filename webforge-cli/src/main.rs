//! webforge CLI - scaffold and configure React projects.
//!
//! This binary provides a command-line interface to the webforge library.

mod commands;
mod error;
mod runner;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::create::ComponentArg;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "webforge")]
#[command(about = "Scaffold React projects and manage their packages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick packages group by group and install them
    Init {
        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Search the catalogue and install a single package
    Add {
        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List the project's installed dependencies
    List {
        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Remove the stock Create React App template files
    Clean {
        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Generate a React component with styles and a test
    Generate {
        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Create a new project (backend, frontend, or both)
    Create {
        /// Which half to create; prompts when omitted
        #[arg(value_enum)]
        component: Option<ComponentArg>,
    },
}

fn main() {
    let cli = Cli::parse();

    let runner = match CliRunner::new() {
        Ok(runner) => runner,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli, &runner) {
        e.exit();
    }
}

fn run(cli: Cli, runner: &CliRunner) -> Result<(), CliError> {
    let config = runner.config();

    match cli.command {
        // Bare `webforge` runs the interactive package selection.
        None => {
            runner.log_startup("init");
            commands::packages::run_init(config, None)
        }
        Some(Commands::Init { dir }) => {
            runner.log_startup("init");
            commands::packages::run_init(config, dir)
        }
        Some(Commands::Add { dir }) => {
            runner.log_startup("add");
            commands::packages::run_add(config, dir)
        }
        Some(Commands::List { dir }) => {
            runner.log_startup("list");
            commands::list::run(&resolve_dir(dir))
        }
        Some(Commands::Clean { dir }) => {
            runner.log_startup("clean");
            commands::clean::run(&resolve_dir(dir))
        }
        Some(Commands::Generate { dir }) => {
            runner.log_startup("generate");
            commands::generate::run(&resolve_dir(dir))
        }
        Some(Commands::Create { component }) => {
            runner.log_startup("create");
            commands::create::run(config, component)
        }
    }
}

/// Resolve an optional `--dir` flag against the current directory.
fn resolve_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
