//! Hunter.io API client library
//!
//! Wraps the Hunter.io v2 email verification and email count endpoints
//! behind thin clients, with an in-memory store of fetched results and a
//! service façade combining the two.
//!
//! ```no_run
//! use hunterio::{EmailCountQuery, HunterService, ServiceError};
//!
//! # async fn run() -> Result<(), ServiceError> {
//! let mut service = HunterService::new("your-api-key");
//!
//! let verification = service.verify_and_save("patrick@stripe.com").await?;
//! println!("status: {}", verification["status"]);
//!
//! let count = service
//!     .count_and_save(&EmailCountQuery::Domain("stripe.com".to_string()))
//!     .await?;
//! println!("emails known: {}", count["total"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod service;

pub use api::{ApiError, EmailCountClient, EmailCountQuery, VerifierClient};
pub use cache::{ResultStore, StoreError};
pub use config::ClientConfig;
pub use service::{HunterService, ServiceError};
