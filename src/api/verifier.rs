//! Email verification endpoint client
//!
//! Wraps `GET /email-verifier`, which checks deliverability of a single
//! email address and returns a JSON report (status, score, SMTP checks).

use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::{unwrap_data, ApiError};
use crate::config::ClientConfig;

/// Path of the email verification endpoint
const VERIFIER_PATH: &str = "email-verifier";

/// Client for the Hunter.io email verification endpoint
#[derive(Debug, Clone)]
pub struct VerifierClient {
    http: Client,
    config: ClientConfig,
}

impl VerifierClient {
    /// Creates a verifier client from the shared configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Creates a verifier client reusing an existing HTTP client
    pub fn with_client(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// Verifies the given email address.
    ///
    /// Returns the `data` value of the response envelope. The payload shape
    /// is defined by the API; no schema is enforced here beyond valid JSON.
    pub async fn verify(&self, email: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.config.base_url, VERIFIER_PATH);
        debug!("verifying email {email}");

        let response = self
            .http
            .get(&url)
            .query(&[("email", email), ("api_key", &self.config.api_key)])
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("email-verifier responded {status}: {body}");

        unwrap_data(&body)
    }
}
