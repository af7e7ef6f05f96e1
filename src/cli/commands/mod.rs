//! CLI command handlers for `PlanPath`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod profile;
pub mod programs;
pub mod search;
