//! Dependency-injected services over the data sources
//!
//! One service object per domain concern, constructed with its collaborators
//! and passed explicitly to callers (no ambient globals). `ProgramService`
//! owns the derived catalog; `ProfileService` owns the cached profile and the
//! debounced field writer.

use crate::core::catalog::ProgramCatalog;
use crate::core::debounce::Debouncer;
use crate::core::filter::filter_by_query;
use crate::core::models::{DegreeProgram, ProgramRequirement, StudentProfile, TermAverages};
use crate::error;
use crate::fetch::{DataSource, FetchError, ProfileStore};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Read side of the degree-program data: flat arrays plus derived indexes.
///
/// The flat program list is kept alongside the catalog because the search
/// filter is defined over the source-ordered array, while lookups go through
/// the maps.
pub struct ProgramService {
    source: Box<dyn DataSource>,
    programs: Vec<DegreeProgram>,
    catalog: ProgramCatalog,
}

impl ProgramService {
    /// Fetch all three arrays once and build the catalog.
    ///
    /// # Errors
    /// Returns the first [`FetchError`] raised by the underlying source.
    pub async fn load(source: Box<dyn DataSource>) -> Result<Self, FetchError> {
        let programs = source.degree_programs().await?;
        let requirements = source.program_requirements().await?;
        let averages = source.term_averages().await?;

        let catalog = ProgramCatalog::build(&programs, &requirements, &averages);
        Ok(Self {
            source,
            programs,
            catalog,
        })
    }

    /// Refetch everything and atomically replace the catalog.
    ///
    /// On error the previous catalog stays in place untouched.
    ///
    /// # Errors
    /// Returns the first [`FetchError`] raised by the underlying source.
    pub async fn reload(&mut self) -> Result<(), FetchError> {
        let programs = self.source.degree_programs().await?;
        let requirements = self.source.program_requirements().await?;
        let averages = self.source.term_averages().await?;

        self.catalog = ProgramCatalog::build(&programs, &requirements, &averages);
        self.programs = programs;
        Ok(())
    }

    /// All programs in source order
    #[must_use]
    pub fn programs(&self) -> &[DegreeProgram] {
        &self.programs
    }

    /// Look up a program by id
    #[must_use]
    pub fn program(&self, id: &str) -> Option<&DegreeProgram> {
        self.catalog.program(id)
    }

    /// Requirements for a program, in source order
    #[must_use]
    pub fn requirements_for(&self, program_id: &str) -> &[ProgramRequirement] {
        self.catalog.requirements_for(program_id)
    }

    /// Term averages for a program, in source order
    #[must_use]
    pub fn averages_for_program(&self, program_id: &str) -> &[TermAverages] {
        self.catalog.averages_for_program(program_id)
    }

    /// Averages across programs for one term
    #[must_use]
    pub fn averages_for_term(&self, term: &str) -> &[TermAverages] {
        self.catalog.averages_for_term(term)
    }

    /// Token-filter the program list by display name
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&DegreeProgram> {
        filter_by_query(query, &self.programs)
    }
}

/// Write side: a student's profile with debounced single-field persistence.
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    record_id: String,
    profile: Arc<RwLock<Option<StudentProfile>>>,
    debouncer: Debouncer,
}

impl ProfileService {
    /// Create a service for one profile record
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>, record_id: String) -> Self {
        Self {
            store,
            record_id,
            profile: Arc::new(RwLock::new(None)),
            debouncer: Debouncer::default(),
        }
    }

    /// Fetch the authoritative profile record and cache it.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the store cannot produce the record.
    pub async fn refresh(&self) -> Result<StudentProfile, FetchError> {
        let fetched = self.store.fetch(&self.record_id).await?;
        *self.profile.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// The most recently fetched profile, if any
    pub async fn profile(&self) -> Option<StudentProfile> {
        self.profile.read().await.clone()
    }

    /// Stage a single-field edit behind the debounce window.
    ///
    /// Rapid successive edits to the same field collapse into one write
    /// carrying the last value; different fields persist independently. After
    /// a successful write the cached profile is refreshed from the store.
    /// Failures are logged and otherwise dropped; there is no retry.
    pub fn set_field(&self, field: &str, value: Value) {
        let store = Arc::clone(&self.store);
        let profile = Arc::clone(&self.profile);
        let record_id = self.record_id.clone();
        let field_name = field.to_string();

        self.debouncer.schedule(field, async move {
            if let Err(err) = store
                .update_field(&field_name, value, &record_id)
                .await
            {
                error!("Failed to persist {field_name} for profile {record_id}: {err}");
                return;
            }
            match store.fetch(&record_id).await {
                Ok(fetched) => *profile.write().await = Some(fetched),
                Err(err) => {
                    error!("Failed to refresh profile {record_id} after update: {err}");
                }
            }
        });
    }

    /// Wait for any staged edits to persist (one-shot CLI usage)
    pub async fn flush(&self) {
        self.debouncer.flush().await;
    }

    /// Drop any staged edits without persisting them
    pub fn discard_pending(&self) {
        self.debouncer.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{MockProfileStore, MockSource};
    use tokio::time::{advance, Duration};

    #[tokio::test]
    async fn test_program_service_load_and_lookup() {
        let service = ProgramService::load(Box::new(MockSource::new()))
            .await
            .expect("mock load succeeds");

        assert!(!service.programs().is_empty());
        let first = &service.programs()[0];
        let looked_up = service.program(&first.id).expect("id lookup");
        assert_eq!(looked_up, first);
        assert!(service.program("no-such-program").is_none());
    }

    #[tokio::test]
    async fn test_program_service_search_uses_token_filter() {
        let service = ProgramService::load(Box::new(MockSource::new()))
            .await
            .expect("mock load succeeds");

        let all = service.search("");
        assert_eq!(all.len(), service.programs().len());

        let none = service.search("zzzz no such program zzzz");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_program_service_reload_replaces_catalog() {
        let mut service = ProgramService::load(Box::new(MockSource::new()))
            .await
            .expect("mock load succeeds");

        let before = service.programs().len();
        service.reload().await.expect("mock reload succeeds");
        assert_eq!(service.programs().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_set_field_debounces_to_last_value() {
        let store = Arc::new(MockProfileStore::with_profile(StudentProfile {
            id: "u1".to_string(),
            name: "Test".to_string(),
            year: None,
            degree_program_id: None,
            minor_id: None,
        }));
        let service = ProfileService::new(store.clone(), "u1".to_string());
        service.refresh().await.expect("mock fetch");

        service.set_field("year", Value::from(2026));
        advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        service.set_field("year", Value::from(2027));

        service.flush().await;

        assert_eq!(store.update_count(), 1);
        let profile = service.profile().await.expect("cached profile");
        assert_eq!(profile.year, Some(2027));
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_discard_pending_drops_write() {
        let store = Arc::new(MockProfileStore::with_profile(StudentProfile {
            id: "u1".to_string(),
            name: "Test".to_string(),
            year: None,
            degree_program_id: None,
            minor_id: None,
        }));
        let service = ProfileService::new(store.clone(), "u1".to_string());

        service.set_field("minor_id", Value::from("math"));
        service.discard_pending();

        advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        assert_eq!(store.update_count(), 0);
    }
}
