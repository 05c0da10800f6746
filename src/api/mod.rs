//! Endpoint clients for the Hunter.io v2 API
//!
//! One client struct per endpoint, plus the response-envelope handling they
//! share. Every successful response arrives as `{"data": {...}}`; failures
//! arrive as `{"errors": [{"details": "..."}]}`. Clients unwrap the
//! envelope and hand callers the `data` value alone.

pub mod email_count;
pub mod verifier;

pub use email_count::{EmailCountClient, EmailCountQuery};
pub use verifier::VerifierClient;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the Hunter.io API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API reported an error with details text
    #[error("hunter.io error: {0}")]
    Api(String),

    /// The response body had no `data` field and no usable error details
    #[error("response missing `data` field: {0}")]
    MissingData(String),

    /// Email count was requested with neither a domain nor a company
    #[error("email count requires a domain or a company name")]
    EmptyQuery,
}

/// Response envelope wrapping every Hunter.io payload
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// A single entry of the `errors` array in a failure envelope
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    details: String,
}

/// Unwraps a raw response body into the envelope's `data` value.
///
/// Falls back to the `errors[0].details` text when `data` is absent, and to
/// the raw body when the response is not a recognizable envelope at all.
pub(crate) fn unwrap_data(body: &str) -> Result<Value, ApiError> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => return Err(ApiError::MissingData(body.to_string())),
    };

    if let Some(data) = envelope.data {
        return Ok(data);
    }

    match envelope.errors.into_iter().next() {
        Some(error) => Err(ApiError::Api(error.details)),
        None => Err(ApiError::MissingData(body.to_string())),
    }
}
