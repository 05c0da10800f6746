//! Email count endpoint client
//!
//! Wraps `GET /email-count`, which reports how many email addresses
//! Hunter.io knows for a domain or a company name. The endpoint takes
//! exactly one of the two identifiers; `EmailCountQuery` encodes that
//! choice so callers cannot send both or neither.

use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::{unwrap_data, ApiError};
use crate::config::ClientConfig;

/// Path of the email count endpoint
const EMAIL_COUNT_PATH: &str = "email-count";

/// Identifier for an email count lookup: a domain or a company name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailCountQuery {
    /// Look up by domain, e.g. `stripe.com`
    Domain(String),
    /// Look up by registered company name, e.g. `Stripe`
    Company(String),
}

impl EmailCountQuery {
    /// Builds a query from two optional identifiers.
    ///
    /// When both are given the domain wins; when neither is given the call
    /// is rejected with [`ApiError::EmptyQuery`].
    pub fn from_parts(domain: Option<&str>, company: Option<&str>) -> Result<Self, ApiError> {
        match (domain, company) {
            (Some(domain), _) => Ok(Self::Domain(domain.to_string())),
            (None, Some(company)) => Ok(Self::Company(company.to_string())),
            (None, None) => Err(ApiError::EmptyQuery),
        }
    }

    /// The identifier string, used as the storage key for lookup results
    pub fn key(&self) -> &str {
        match self {
            Self::Domain(domain) => domain,
            Self::Company(company) => company,
        }
    }

    /// The query parameter this identifier is sent as
    fn param(&self) -> (&'static str, &str) {
        match self {
            Self::Domain(domain) => ("domain", domain),
            Self::Company(company) => ("company", company),
        }
    }
}

/// Client for the Hunter.io email count endpoint
#[derive(Debug, Clone)]
pub struct EmailCountClient {
    http: Client,
    config: ClientConfig,
}

impl EmailCountClient {
    /// Creates an email count client from the shared configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Creates an email count client reusing an existing HTTP client
    pub fn with_client(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// Fetches the email count for the given domain or company.
    ///
    /// Returns the `data` value of the response envelope.
    pub async fn count(&self, query: &EmailCountQuery) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.config.base_url, EMAIL_COUNT_PATH);
        let (name, value) = query.param();
        debug!("counting emails for {name} {value}");

        let response = self
            .http
            .get(&url)
            .query(&[(name, value), ("api_key", &self.config.api_key)])
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("email-count responded {status}: {body}");

        unwrap_data(&body)
    }
}
