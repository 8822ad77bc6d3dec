//! External process execution.
//!
//! Everything that reaches outside the process (the npm install batch,
//! `npx create-react-app`, venv creation, chmod) goes through the
//! [`CommandRunner`] trait so that command handlers and scaffolds can be
//! tested without spawning anything.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from spawning or waiting on an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The command could not be spawned at all.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: io::Error,
    },

    /// The command ran but exited non-zero.
    #[error("'{program}' exited with {status}")]
    NonZeroExit { program: String, status: String },
}

/// Runner for external commands.
///
/// Implementations block until the child exits and report a non-zero
/// exit status as an error. Child stdio is inherited so the user sees
/// the external tool's own output.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, optionally in `cwd`, and wait for it.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), ExecError>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), ExecError> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        tracing::debug!(program, ?args, "spawning external command");

        let status = command.status().map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::NonZeroExit {
                program: program.to_string(),
                status: status.to_string(),
            })
        }
    }
}

/// Recording runner for tests: captures every invocation and returns a
/// scripted result.
#[derive(Default)]
pub struct RecordingRunner {
    invocations: std::sync::Mutex<Vec<Invocation>>,
    fail_with: Option<String>,
}

/// One captured command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose every invocation fails with a non-zero exit.
    pub fn failing(status: &str) -> Self {
        Self {
            invocations: std::sync::Mutex::new(Vec::new()),
            fail_with: Some(status.to_string()),
        }
    }

    /// All invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), ExecError> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        match &self.fail_with {
            None => Ok(()),
            Some(status) => Err(ExecError::NonZeroExit {
                program: program.to_string(),
                status: status.clone(),
            }),
        }
    }
}
