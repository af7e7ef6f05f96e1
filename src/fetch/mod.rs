//! Data-source seams: JSON-over-HTTP loaders and their mock doubles
//!
//! Every loader issues a GET against a configured URL and expects a 2xx
//! response carrying a JSON array of one of the three record shapes. A mock
//! source backed by embedded fixtures stands in when the `use_mock` flag (or
//! the `PLANPATH_USE_MOCK` environment variable) is set, so the CLI and tests
//! run without a network.

pub mod live;
pub mod mock;

pub use live::{LiveProfileStore, LiveSource};
pub use mock::{MockProfileStore, MockSource};

use crate::core::config::ApiConfig;
use crate::core::models::{DegreeProgram, ProgramRequirement, StudentProfile, TermAverages};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Environment variable overriding the configured mock/live selection.
/// Boolean-like: `1`/`true`/`yes` select mock, `0`/`false`/`no` select live.
pub const USE_MOCK_ENV: &str = "PLANPATH_USE_MOCK";

/// The remote resources a loader can fail on, named for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Degree program list
    Programs,
    /// Program requirement rows
    Requirements,
    /// Per-term grade averages
    Averages,
    /// Student profile record
    Profile,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Programs => "degree programs",
            Self::Requirements => "program requirements",
            Self::Averages => "term averages",
            Self::Profile => "student profile",
        };
        write!(f, "{name}")
    }
}

/// Failure loading or persisting remote data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("request for {resource} failed: {source}")]
    Transport {
        /// Which resource the request was for
        resource: Resource,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("failed to load {resource}: HTTP {status}")]
    Status {
        /// Which resource the request was for
        resource: Resource,
        /// HTTP status code returned
        status: u16,
    },

    /// The response body was not the expected JSON shape
    #[error("failed to decode {resource}: {source}")]
    Decode {
        /// Which resource the response was for
        resource: Resource,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The requested record does not exist
    #[error("{resource} record '{record_id}' not found")]
    NotFound {
        /// Which resource was requested
        resource: Resource,
        /// Identifier that failed to resolve
        record_id: String,
    },
}

/// Read-only loader for the three flat degree-planning arrays.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full degree program list
    async fn degree_programs(&self) -> Result<Vec<DegreeProgram>, FetchError>;

    /// Fetch all requirement rows across programs
    async fn program_requirements(&self) -> Result<Vec<ProgramRequirement>, FetchError>;

    /// Fetch all per-term averages across programs
    async fn term_averages(&self) -> Result<Vec<TermAverages>, FetchError>;
}

/// Fetch and single-field update access to a student profile record.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the authoritative profile record
    async fn fetch(&self, record_id: &str) -> Result<StudentProfile, FetchError>;

    /// Persist one field of the profile record.
    ///
    /// Callers must await completion before assuming persistence.
    async fn update_field(
        &self,
        field: &str,
        value: Value,
        record_id: &str,
    ) -> Result<(), FetchError>;
}

/// Whether the mock source is selected, honoring the environment override.
#[must_use]
pub fn mock_selected(config: &ApiConfig) -> bool {
    match std::env::var(USE_MOCK_ENV) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            _ => config.use_mock,
        },
        Err(_) => config.use_mock,
    }
}

/// Build the configured data source (mock or live).
#[must_use]
pub fn select_source(config: &ApiConfig) -> Box<dyn DataSource> {
    if mock_selected(config) {
        Box::new(MockSource::new())
    } else {
        Box::new(LiveSource::new(config.base_url.clone()))
    }
}

/// Build the configured profile store (mock or live).
#[must_use]
pub fn select_profile_store(config: &ApiConfig) -> Arc<dyn ProfileStore> {
    if mock_selected(config) {
        Arc::new(MockProfileStore::new())
    } else {
        Arc::new(LiveProfileStore::new(config.profile_url.clone()))
    }
}
