//! Cache module for storing API results in memory
//!
//! This module provides an in-process store mapping a lookup key (email
//! address, domain or company name) to its last-fetched JSON result. The
//! store is transient: nothing is written to disk, and its contents are
//! discarded when the owning value is dropped.

mod store;

pub use store::{ResultStore, StoreError};
