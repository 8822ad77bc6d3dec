//! npm-backed batch installer.

use std::path::Path;

use tracing::info;

use crate::exec::CommandRunner;

use super::{InstallError, PackageSpec};

/// Installs package specifiers through the external package manager.
///
/// Generic over [`CommandRunner`] so handler and scaffold tests can
/// record invocations instead of spawning npm.
#[derive(Debug)]
pub struct NpmInstaller<R: CommandRunner> {
    runner: R,
    manager: String,
}

impl<R: CommandRunner> NpmInstaller<R> {
    /// An installer that invokes `npm`.
    pub fn new(runner: R) -> Self {
        Self::with_manager(runner, "npm")
    }

    /// An installer that invokes a different manager binary
    /// (`pnpm`, `yarn`, ...) with npm-compatible `install` syntax.
    pub fn with_manager(runner: R, manager: impl Into<String>) -> Self {
        Self {
            runner,
            manager: manager.into(),
        }
    }

    /// Install all `specs` in one batch invocation.
    ///
    /// An empty list is a successful no-op; the external manager is
    /// never spawned for it.
    pub fn install(&self, specs: &[PackageSpec], cwd: &Path) -> Result<(), InstallError> {
        if specs.is_empty() {
            info!("no packages to install");
            return Ok(());
        }

        let rendered: Vec<String> = specs.iter().map(PackageSpec::to_string).collect();
        info!(packages = %rendered.join(", "), "installing packages");

        let mut args: Vec<&str> = vec!["install"];
        args.extend(rendered.iter().map(String::as_str));

        self.runner.run(&self.manager, &args, Some(cwd))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;

    #[test]
    fn empty_batch_never_invokes_the_manager() {
        let installer = NpmInstaller::new(RecordingRunner::new());
        installer.install(&[], Path::new(".")).unwrap();
        assert!(installer.runner.invocations().is_empty());
    }

    #[test]
    fn all_specs_go_into_one_invocation() {
        let installer = NpmInstaller::new(RecordingRunner::new());
        let specs = vec![
            PackageSpec::pinned("tailwindcss", "3.4.0"),
            PackageSpec::latest("prettier"),
        ];
        installer.install(&specs, Path::new("/proj")).unwrap();

        let recorded = installer.runner.invocations();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program, "npm");
        assert_eq!(
            recorded[0].args,
            vec!["install", "tailwindcss@3.4.0", "prettier"]
        );
        assert_eq!(recorded[0].cwd.as_deref(), Some(Path::new("/proj")));
    }

    #[test]
    fn non_zero_exit_fails_the_whole_batch() {
        let installer = NpmInstaller::new(RecordingRunner::failing("exit status: 1"));
        let specs = vec![PackageSpec::latest("prettier")];
        let err = installer.install(&specs, Path::new(".")).unwrap_err();
        assert!(matches!(err, InstallError::Command(_)));
    }

    #[test]
    fn alternate_manager_binary_is_used() {
        let installer = NpmInstaller::with_manager(RecordingRunner::new(), "pnpm");
        installer
            .install(&[PackageSpec::latest("zod")], Path::new("."))
            .unwrap();
        assert_eq!(installer.runner.invocations()[0].program, "pnpm");
    }
}
