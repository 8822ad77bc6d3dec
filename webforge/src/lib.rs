//! Webforge - project scaffolding for React frontends and companion backends
//!
//! This library provides the core functionality behind the `webforge` CLI:
//! a searchable catalogue of curated npm packages, a batch installer that
//! delegates to the external package manager, a registry of post-install
//! configuration plugins, and the template scaffolding used by the
//! `clean`, `generate` and `create` commands.
//!
//! # High-Level API
//!
//! ```ignore
//! use webforge::catalog::Catalog;
//! use webforge::exec::ShellRunner;
//! use webforge::installer::{NpmInstaller, PackageSpec};
//! use webforge::plugins::PluginRegistry;
//!
//! let catalog = Catalog::new();
//! let picks = catalog.search("tailwnd");
//!
//! let installer = NpmInstaller::new(ShellRunner);
//! let specs: Vec<PackageSpec> = picks.iter().map(|p| PackageSpec::for_package(p)).collect();
//! installer.install(&specs, Path::new("."))?;
//!
//! let registry = PluginRegistry::new();
//! registry.setup("tailwindcss", Path::new("."))?;
//! ```

pub mod catalog;
pub mod config;
pub mod exec;
pub mod installer;
pub mod logging;
pub mod plugins;
pub mod scaffold;

/// Version of the webforge library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
