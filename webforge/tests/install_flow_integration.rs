//! Integration test for the install-then-configure flow.
//!
//! Exercises the public library surface the way the CLI composes it:
//! build specifiers from raw selections, run one batch install through
//! a recording runner, then dispatch each package through the plugin
//! registry against a scratch project directory.

use std::path::Path;

use tempfile::TempDir;

use webforge::exec::RecordingRunner;
use webforge::installer::{NpmInstaller, PackageSpec};
use webforge::plugins::{PluginRegistry, SetupOutcome};

#[test]
fn selected_packages_are_installed_then_configured() {
    let project = TempDir::new().unwrap();
    let selection = ["tailwindcss", "prettier", "clsx"];

    // Version pinning.
    let specs: Vec<PackageSpec> = selection.iter().map(|p| PackageSpec::for_package(p)).collect();
    assert_eq!(specs[0].to_string(), "tailwindcss@3.4.0");
    assert_eq!(specs[1].to_string(), "prettier");
    assert_eq!(specs[2].to_string(), "clsx");

    // One batch install.
    let installer = NpmInstaller::new(RecordingRunner::new());
    installer.install(&specs, project.path()).unwrap();

    // Per-package setup in selection order.
    let registry = PluginRegistry::new();
    let outcomes: Vec<SetupOutcome> = selection
        .iter()
        .map(|p| registry.setup(p, project.path()).unwrap())
        .collect();

    assert_eq!(
        outcomes,
        vec![
            SetupOutcome::Configured,
            SetupOutcome::Configured,
            SetupOutcome::NoPlugin,
        ]
    );

    assert!(project.path().join("tailwind.config.js").exists());
    assert!(project.path().join("postcss.config.js").exists());
    assert!(project.path().join("src/index.scss").exists());
    assert!(project.path().join(".prettierrc.json").exists());
    assert!(project.path().join(".prettierignore").exists());
}

#[test]
fn rerunning_setup_leaves_files_unchanged() {
    let project = TempDir::new().unwrap();
    let registry = PluginRegistry::new();

    registry.setup("tailwindcss", project.path()).unwrap();
    let first = std::fs::read_to_string(project.path().join("tailwind.config.js")).unwrap();

    let outcome = registry.setup("tailwindcss", project.path()).unwrap();
    assert_eq!(outcome, SetupOutcome::AlreadyConfigured);

    let second = std::fs::read_to_string(project.path().join("tailwind.config.js")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_selection_never_spawns_the_package_manager() {
    let installer = NpmInstaller::new(RecordingRunner::new());
    installer.install(&[], Path::new(".")).unwrap();
}
