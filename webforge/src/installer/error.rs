//! Installer error types.

use thiserror::Error;

use crate::exec::ExecError;

/// Errors from the batch install step.
///
/// A failed batch is all-or-nothing: the external manager's own
/// partial-install state is outside this tool's control, so no
/// partial-success reporting is attempted and nothing is retried.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The package manager invocation failed.
    #[error("failed to install packages: {0}")]
    Command(#[from] ExecError),
}
