//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a single exit path.

use std::fmt;
use std::process;

use webforge::installer::InstallError;
use webforge::plugins::SetupError;
use webforge::scaffold::ScaffoldError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// An interactive prompt failed (closed terminal, I/O error)
    Prompt(String),
    /// The batch install failed
    Install(InstallError),
    /// Post-install configuration failed for a package
    Setup(SetupError),
    /// Project scaffolding failed
    Scaffold(ScaffoldError),
    /// Failed to read a project file
    FileRead { path: String, error: std::io::Error },
    /// Failed to write a project file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Install(_) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. The package manager is not installed or not on PATH");
                eprintln!("  2. No network connection to the npm registry");
                eprintln!("  3. The target directory has no package.json (run 'webforge create' first)");
            }
            CliError::Scaffold(_) => {
                eprintln!();
                eprintln!("Make sure Node.js (and Python, for Python backends) is installed");
                eprintln!("and that the target directory is writable.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Prompt(msg) => write!(f, "Prompt error: {}", msg),
            CliError::Install(e) => write!(f, "{}", e),
            CliError::Setup(e) => write!(f, "{}", e),
            CliError::Scaffold(e) => write!(f, "Scaffolding failed: {}", e),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Install(e) => Some(e),
            CliError::Setup(e) => Some(e),
            CliError::Scaffold(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<InstallError> for CliError {
    fn from(e: InstallError) -> Self {
        CliError::Install(e)
    }
}

impl From<SetupError> for CliError {
    fn from(e: SetupError) -> Self {
        CliError::Setup(e)
    }
}

impl From<ScaffoldError> for CliError {
    fn from(e: ScaffoldError) -> Self {
        CliError::Scaffold(e)
    }
}
