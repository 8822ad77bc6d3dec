//! Backend scaffolding for the `create` flow.
//!
//! Each supported technology emits its template files into the backend
//! directory and installs its dependencies through the external
//! package manager. The Python backends additionally create a virtual
//! environment and a run script.

mod django;
mod express;
mod fastapi;
mod nestjs;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::exec::CommandRunner;

use super::{ensure_dir, write_file, ScaffoldError};

/// Backend technology choices offered by `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Express,
    NestJs,
    FastApi,
    Django,
}

impl BackendKind {
    /// All choices in prompt order.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Express,
        BackendKind::NestJs,
        BackendKind::FastApi,
        BackendKind::Django,
    ];
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BackendKind::Express => "Node.js (Express)",
            BackendKind::NestJs => "Node.js (NestJS)",
            BackendKind::FastApi => "Python (FastAPI)",
            BackendKind::Django => "Python (Django)",
        };
        write!(f, "{label}")
    }
}

/// Scaffold a backend of the given kind into `dir`.
///
/// The directory is created if missing; callers are expected to have
/// checked it does not already hold a backend.
pub fn scaffold(
    kind: BackendKind,
    dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    ensure_dir(dir)?;
    info!(%kind, dir = %dir.display(), "scaffolding backend");

    match kind {
        BackendKind::Express => express::scaffold(dir, runner),
        BackendKind::NestJs => nestjs::scaffold(dir, runner),
        BackendKind::FastApi => fastapi::scaffold(dir, runner),
        BackendKind::Django => django::scaffold(dir, runner),
    }
}

/// Create a Python virtual environment under `dir/venv`.
pub(crate) fn create_python_env(
    dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    info!("creating Python virtual environment");
    runner.run("python", &["-m", "venv", "venv"], Some(dir))?;
    Ok(())
}

/// Path of a binary inside the virtual environment, relative to the
/// backend directory.
pub(crate) fn venv_bin(name: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("venv").join("Scripts").join(name)
    } else {
        PathBuf::from("venv").join("bin").join(name)
    }
}

/// Install Python requirements with the virtualenv's pip.
pub(crate) fn pip_install(
    dir: &Path,
    args: &[&str],
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    let pip = venv_bin("pip");
    let pip = pip.to_string_lossy();

    info!("installing Python dependencies");
    let mut full: Vec<&str> = vec!["install"];
    full.extend_from_slice(args);
    runner.run(&pip, &full, Some(dir))?;
    Ok(())
}

/// Write the backend run script (`run.sh` on Unix, `run.bat` on
/// Windows) that activates the venv and starts `server_command`.
///
/// On Unix the script is made executable via `chmod`; a chmod failure
/// is logged but does not fail the scaffold.
pub(crate) fn write_run_script(
    dir: &Path,
    server_command: &str,
    runner: &dyn CommandRunner,
) -> Result<PathBuf, ScaffoldError> {
    let (script_name, contents) = if cfg!(windows) {
        (
            "run.bat",
            format!(
                "@echo off\ncall {}\necho Virtual environment activated\n{}\n",
                venv_bin("activate").display(),
                server_command,
            ),
        )
    } else {
        (
            "run.sh",
            format!(
                "#!/bin/bash\nsource {}\necho \"Virtual environment activated\"\n{}\n",
                venv_bin("activate").display(),
                server_command,
            ),
        )
    };

    let script_path = dir.join(script_name);
    write_file(&script_path, &contents)?;

    if !cfg!(windows) {
        if let Err(err) = runner.run(
            "chmod",
            &["+x", &script_path.to_string_lossy()],
            Some(dir),
        ) {
            warn!(%err, "could not mark run script executable");
        }
    }

    Ok(script_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn venv_bin_points_into_the_environment() {
        let pip = venv_bin("pip");
        assert!(pip.starts_with("venv"));
        assert!(pip.to_string_lossy().contains("pip"));
    }

    #[test]
    fn run_script_activates_venv_and_starts_server() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        let path = write_run_script(dir.path(), "venv/bin/uvicorn main:app --reload", &runner)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("activate"));
        assert!(contents.contains("uvicorn main:app --reload"));

        if !cfg!(windows) {
            let chmods: Vec<_> = runner
                .invocations()
                .into_iter()
                .filter(|i| i.program == "chmod")
                .collect();
            assert_eq!(chmods.len(), 1);
        }
    }

    #[test]
    fn chmod_failure_does_not_fail_the_scaffold() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner::failing("exit status: 1");
        assert!(write_run_script(dir.path(), "server", &runner).is_ok());
    }
}
