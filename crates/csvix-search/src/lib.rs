//! Search-engine client for index provisioning and bulk loading.
//!
//! This crate provides a synchronous OpenSearch-compatible HTTP client, the
//! [`SearchBackend`] trait that allows swapping the transport in tests, and
//! the provisioning and bulk-load operations built on top of it.

pub mod bulk;
pub mod client;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod provision;
pub mod types;

pub use bulk::{BulkOptions, BulkSummary, DEFAULT_BATCH_SIZE, bulk_load, encode_batch};
pub use client::SearchClient;
pub use config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT, DEFAULT_USERNAME, SearchConfig};
pub use error::{Result, SearchError};
pub use interfaces::SearchBackend;
pub use provision::{ProvisionOutcome, ensure_index};
pub use types::{BulkError, BulkItem, BulkItemStatus, BulkResponse, CountResponse};
