//! Live JSON-over-HTTP loaders

use crate::core::models::{DegreeProgram, ProgramRequirement, StudentProfile, TermAverages};
use crate::fetch::{DataSource, FetchError, ProfileStore, Resource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Loader hitting the configured degree-planning API.
pub struct LiveSource {
    client: reqwest::Client,
    base_url: String,
}

impl LiveSource {
    /// Create a loader rooted at `base_url`
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// GET `{base_url}/{path}` and decode a JSON array body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { resource, source })
    }
}

#[async_trait]
impl DataSource for LiveSource {
    async fn degree_programs(&self) -> Result<Vec<DegreeProgram>, FetchError> {
        self.get_json(Resource::Programs, "degree-programs.json")
            .await
    }

    async fn program_requirements(&self) -> Result<Vec<ProgramRequirement>, FetchError> {
        self.get_json(Resource::Requirements, "degree-requirements.json")
            .await
    }

    async fn term_averages(&self) -> Result<Vec<TermAverages>, FetchError> {
        self.get_json(Resource::Averages, "program-averages.json")
            .await
    }
}

/// Profile record access against the configured profile endpoint.
pub struct LiveProfileStore {
    client: reqwest::Client,
    base_url: String,
}

impl LiveProfileStore {
    /// Create a store rooted at `base_url`
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn record_url(&self, record_id: &str) -> String {
        format!("{}/{record_id}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProfileStore for LiveProfileStore {
    async fn fetch(&self, record_id: &str) -> Result<StudentProfile, FetchError> {
        let resource = Resource::Profile;
        let response = self
            .client
            .get(self.record_url(record_id))
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound {
                resource,
                record_id: record_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { resource, source })
    }

    async fn update_field(
        &self,
        field: &str,
        value: Value,
        record_id: &str,
    ) -> Result<(), FetchError> {
        let resource = Resource::Profile;
        let body = serde_json::json!({ field: value });
        let response = self
            .client
            .patch(self.record_url(record_id))
            .json(&body)
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
