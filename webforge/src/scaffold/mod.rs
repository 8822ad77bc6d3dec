//! Project scaffolding: template emission and external generators.
//!
//! These functions compose the external scaffold generators
//! (`create-react-app`, the NestJS CLI, `python -m venv`,
//! `django-admin`) with the template files webforge writes itself.
//! All process spawns go through [`crate::exec::CommandRunner`].

pub mod backend;
pub mod component;
pub mod frontend;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::exec::ExecError;

/// Errors from scaffolding operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// File-system operation failed.
    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// An external generator or installer failed.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The target directory must be empty for this operation.
    #[error("directory {} is not empty", .0.display())]
    DirNotEmpty(PathBuf),

    /// A file the scaffold needs to rewrite is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Generated JSON could not be read back.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}
