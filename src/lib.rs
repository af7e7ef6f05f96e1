//! Shared library for `PlanPath`
//! Contains the degree-program catalog, search filter, data loaders, and
//! profile-update services used by the CLI.

pub mod core;
pub mod fetch;
pub mod logger;

pub use crate::core::get_version;
