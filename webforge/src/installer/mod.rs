//! Batch installation of npm packages.
//!
//! The installer owns two concerns:
//!
//! - turning raw package names into [`PackageSpec`]s, applying the
//!   static version pin table;
//! - handing the whole specifier list to the external package manager
//!   in a single batch invocation.
//!
//! Installing as one batch is deliberate: the package manager resolves
//! the dependency tree together (fewer broken partial trees) and the
//! tool spawns one process instead of N.

mod error;
mod npm;
mod spec;

pub use error::InstallError;
pub use npm::NpmInstaller;
pub use spec::{pinned_version, PackageSpec};
