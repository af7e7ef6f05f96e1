//! Core module: models, derived indexes, search filter, and services

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod models;
pub mod service;

/// Returns the current version of the `PlanPath` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
