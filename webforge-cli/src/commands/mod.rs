//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`packages`] - Package selection, install, and configuration (`init`, `add`)
//! - [`create`] - Project scaffolding (backend, frontend, monorepo)
//! - [`generate`] - React component generation
//! - [`clean`] - Create React App template cleanup
//! - [`list`] - Installed dependency listing

pub mod clean;
pub mod create;
pub mod generate;
pub mod list;
pub mod packages;
