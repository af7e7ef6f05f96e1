//! Mock data sources backed by embedded fixtures
//!
//! The fixtures are compiled in with `include_str!` so the mock path needs no
//! filesystem or network at runtime. `MockProfileStore` also doubles as the
//! test double for the debounced updater: it records how many writes landed
//! and applies them to an in-memory record.

use crate::core::models::profile::fields;
use crate::core::models::{DegreeProgram, ProgramRequirement, StudentProfile, TermAverages};
use crate::fetch::{DataSource, FetchError, ProfileStore, Resource};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const PROGRAMS_JSON: &str = include_str!("../assets/mock/degree_programs.json");
const REQUIREMENTS_JSON: &str = include_str!("../assets/mock/degree_requirements.json");
const AVERAGES_JSON: &str = include_str!("../assets/mock/program_averages.json");
const PROFILE_JSON: &str = include_str!("../assets/mock/student_profile.json");

/// Read-only source decoding the embedded fixture arrays on each call.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl MockSource {
    /// Create a mock source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataSource for MockSource {
    async fn degree_programs(&self) -> Result<Vec<DegreeProgram>, FetchError> {
        serde_json::from_str(PROGRAMS_JSON).map_err(|source| FetchError::Decode {
            resource: Resource::Programs,
            source,
        })
    }

    async fn program_requirements(&self) -> Result<Vec<ProgramRequirement>, FetchError> {
        serde_json::from_str(REQUIREMENTS_JSON).map_err(|source| FetchError::Decode {
            resource: Resource::Requirements,
            source,
        })
    }

    async fn term_averages(&self) -> Result<Vec<TermAverages>, FetchError> {
        serde_json::from_str(AVERAGES_JSON).map_err(|source| FetchError::Decode {
            resource: Resource::Averages,
            source,
        })
    }
}

/// In-memory profile store seeded from the embedded fixture.
#[derive(Debug)]
pub struct MockProfileStore {
    profile: Mutex<StudentProfile>,
    updates: AtomicUsize,
}

impl Default for MockProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProfileStore {
    /// Create a store seeded with the embedded demo profile.
    ///
    /// # Panics
    /// Panics if the compiled-in fixture is invalid JSON, which cannot happen
    /// for a shipped binary.
    #[must_use]
    pub fn new() -> Self {
        let profile =
            serde_json::from_str(PROFILE_JSON).expect("embedded profile fixture is valid JSON");
        Self::with_profile(profile)
    }

    /// Create a store seeded with a specific record (test setup)
    #[must_use]
    pub fn with_profile(profile: StudentProfile) -> Self {
        Self {
            profile: Mutex::new(profile),
            updates: AtomicUsize::new(0),
        }
    }

    /// Number of `update_field` calls that have landed
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StudentProfile> {
        self.profile
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn fetch(&self, record_id: &str) -> Result<StudentProfile, FetchError> {
        let profile = self.lock().clone();
        if profile.id == record_id {
            Ok(profile)
        } else {
            Err(FetchError::NotFound {
                resource: Resource::Profile,
                record_id: record_id.to_string(),
            })
        }
    }

    async fn update_field(
        &self,
        field: &str,
        value: Value,
        record_id: &str,
    ) -> Result<(), FetchError> {
        let mut profile = self.lock();
        if profile.id != record_id {
            return Err(FetchError::NotFound {
                resource: Resource::Profile,
                record_id: record_id.to_string(),
            });
        }

        match field {
            fields::NAME => {
                if let Some(name) = value.as_str() {
                    profile.name = name.to_string();
                }
            }
            fields::YEAR => profile.year = value.as_u64().and_then(|y| u32::try_from(y).ok()),
            fields::DEGREE_PROGRAM_ID => {
                profile.degree_program_id = value.as_str().map(ToString::to_string);
            }
            fields::MINOR_ID => profile.minor_id = value.as_str().map(ToString::to_string),
            _ => {}
        }
        drop(profile);

        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixtures_decode() {
        let source = MockSource::new();

        let programs = source.degree_programs().await.expect("programs fixture");
        assert!(!programs.is_empty());

        let requirements = source
            .program_requirements()
            .await
            .expect("requirements fixture");
        assert!(requirements
            .iter()
            .all(|r| r.course_id.is_some() || r.description.is_some()));

        let averages = source.term_averages().await.expect("averages fixture");
        assert!(averages.iter().any(|row| row.gpa.is_some()));
    }

    #[tokio::test]
    async fn test_profile_fetch_and_update() {
        let store = MockProfileStore::new();
        let profile = store.fetch("demo-student").await.expect("seeded profile");
        assert_eq!(profile.degree_program_id.as_deref(), Some("bs-cs"));

        store
            .update_field("minor_id", Value::from("bs-math"), "demo-student")
            .await
            .expect("update succeeds");
        assert_eq!(store.update_count(), 1);

        let profile = store.fetch("demo-student").await.expect("refetch");
        assert_eq!(profile.minor_id.as_deref(), Some("bs-math"));
    }

    #[tokio::test]
    async fn test_unknown_record_is_not_found() {
        let store = MockProfileStore::new();
        let err = store.fetch("nobody").await.expect_err("unknown id");
        assert!(matches!(err, FetchError::NotFound { .. }));
    }
}
