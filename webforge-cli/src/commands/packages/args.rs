//! Argument types for the package commands.

use std::path::PathBuf;

/// Arguments for the `init` command.
pub struct InitArgs {
    /// Project directory the packages are installed into.
    pub project_dir: PathBuf,
}

/// Arguments for the `add` command.
pub struct AddArgs {
    /// Project directory the package is installed into.
    pub project_dir: PathBuf,
}
