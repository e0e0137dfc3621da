//! REST collection client.
//!
//! One client serves every collection on the resource store; operations are
//! generic over the entity type, which names its own endpoint. JSON bodies
//! only, no auth, no pagination. The response record from create/update is
//! canonical and supersedes whatever the client submitted.

use crate::error::{ClientError, Result};
use crate::models::Entity;
use reqwest::Client;
use std::time::Duration;

pub struct CollectionApi {
    client: Client,
    base_url: String,
}

impl CollectionApi {
    /// Create a new collection client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full collection snapshot.
    pub async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, T::COLLECTION))
            .send()
            .await?;

        if response.status().is_success() {
            let records: Vec<T> = response.json().await?;
            Ok(records)
        } else {
            Err(ClientError::Server(format!(
                "Failed to list {}: {}",
                T::COLLECTION,
                response.status()
            )))
        }
    }

    /// Create a record from a draft. Returns the backend's canonical record.
    pub async fn create<T: Entity>(&self, draft: &T) -> Result<T> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, T::COLLECTION))
            .json(draft)
            .send()
            .await?;

        if response.status().is_success() {
            let canonical: T = response.json().await?;
            log::debug!("Created {} {}", T::COLLECTION, canonical.id());
            Ok(canonical)
        } else {
            Err(ClientError::Server(format!(
                "Failed to create {}: {}",
                T::COLLECTION,
                response.status()
            )))
        }
    }

    /// Replace the record with the given id. Returns the canonical record.
    pub async fn update<T: Entity>(&self, id: &str, record: &T) -> Result<T> {
        let response = self
            .client
            .put(format!("{}/{}/{}", self.base_url, T::COLLECTION, id))
            .json(record)
            .send()
            .await?;

        if response.status().is_success() {
            let canonical: T = response.json().await?;
            Ok(canonical)
        } else {
            Err(ClientError::Server(format!(
                "Failed to update {} {}: {}",
                T::COLLECTION,
                id,
                response.status()
            )))
        }
    }

    /// Delete the record with the given id.
    pub async fn delete<T: Entity>(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/{}/{}", self.base_url, T::COLLECTION, id))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Server(format!(
                "Failed to delete {} {}: {}",
                T::COLLECTION,
                id,
                response.status()
            )))
        }
    }
}
