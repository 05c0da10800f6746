//! Service façade combining the endpoint clients with the result store
//!
//! `HunterService` performs a remote call, mirrors the outcome into the
//! store, and offers read/update/delete access to saved entries. Control
//! flow is linear: façade → client → awaited HTTP call → store.

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiError, EmailCountClient, EmailCountQuery, VerifierClient};
use crate::cache::{ResultStore, StoreError};
use crate::config::ClientConfig;

/// Errors that can occur when using the service façade
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Façade over the Hunter.io endpoints and a local result store
///
/// Both endpoint clients share the configuration handed to the
/// constructor. A store entry is created only after a successful remote
/// call; failed calls leave the store untouched.
#[derive(Debug)]
pub struct HunterService {
    verifier: VerifierClient,
    email_count: EmailCountClient,
    store: ResultStore,
}

impl HunterService {
    /// Creates a service talking to the production Hunter.io API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a service from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            verifier: VerifierClient::new(config.clone()),
            email_count: EmailCountClient::new(config),
            store: ResultStore::new(),
        }
    }

    /// Verifies an email address and saves the result under that address.
    ///
    /// Returns the verification data as received from the API.
    pub async fn verify_and_save(&mut self, email: &str) -> Result<Value, ServiceError> {
        let result = self.verifier.verify(email).await?;
        self.store.save(email, result.clone());
        Ok(result)
    }

    /// Fetches the email count for a domain or company and saves the result
    /// under the queried identifier.
    pub async fn count_and_save(&mut self, query: &EmailCountQuery) -> Result<Value, ServiceError> {
        let result = self.email_count.count(query).await?;
        self.store.save(query.key(), result.clone());
        Ok(result)
    }

    /// Returns the saved result for a key, or `None` if absent
    pub fn saved_result(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    /// Iterates over all saved results
    pub fn saved_results(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.iter()
    }

    /// Checks whether a key has a saved result
    pub fn has_saved(&self, key: &str) -> bool {
        self.store.has(key)
    }

    /// Returns when a key was saved or last updated, or `None` if absent
    pub fn saved_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.store.saved_at(key)
    }

    /// Replaces the saved result for an existing key.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the key has no saved result.
    pub fn update_saved(&mut self, key: &str, value: Value) -> Result<(), ServiceError> {
        Ok(self.store.update(key, value)?)
    }

    /// Removes the saved result for an existing key and returns it.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the key has no saved result.
    pub fn delete_saved(&mut self, key: &str) -> Result<Value, ServiceError> {
        Ok(self.store.delete(key)?)
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn local_service() -> HunterService {
        // Points at an unroutable address; these tests never hit the network.
        HunterService::with_config(
            ClientConfig::new("test-key").with_base_url("http://127.0.0.1:1"),
        )
    }

    #[test]
    fn test_update_saved_missing_key_propagates_not_found() {
        let mut service = local_service();

        let err = service
            .update_saved("a@b.com", json!({}))
            .expect_err("update on empty store should fail");

        match err {
            ServiceError::Store(StoreError::NotFound(key)) => assert_eq!(key, "a@b.com"),
            other => panic!("Expected StoreError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_saved_missing_key_propagates_not_found() {
        let mut service = local_service();

        let err = service
            .delete_saved("stripe.com")
            .expect_err("delete on empty store should fail");

        match err {
            ServiceError::Store(StoreError::NotFound(key)) => assert_eq!(key, "stripe.com"),
            other => panic!("Expected StoreError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_saved_result_reads_through_to_store() {
        let mut service = local_service();
        assert!(service.saved_result("a@b.com").is_none());
        assert!(!service.has_saved("a@b.com"));

        service.store.save("a@b.com", json!({"status": "valid"}));

        assert_eq!(service.saved_result("a@b.com"), Some(&json!({"status": "valid"})));
        assert!(service.has_saved("a@b.com"));
        assert_eq!(service.saved_results().count(), 1);
        assert!(service.saved_at("a@b.com").is_some());
    }
}
