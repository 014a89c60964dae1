//! The abstract search-backend interface.
//!
//! Provisioning and bulk loading are written against this trait so the HTTP
//! transport can be swapped for an in-memory fake in tests.

use csvix_model::IndexSchema;

use crate::error::Result;
use crate::types::BulkResponse;

pub trait SearchBackend {
    fn index_exists(&self, index: &str) -> Result<bool>;

    /// Deletes the index unconditionally. Irreversible.
    fn delete_index(&self, index: &str) -> Result<()>;

    fn create_index(&self, index: &str, schema: &IndexSchema) -> Result<()>;

    /// Submits one NDJSON batch to `/{index}/_bulk`.
    fn bulk(&self, index: &str, body: String) -> Result<BulkResponse>;

    /// Makes just-written documents visible to subsequent reads.
    fn refresh(&self, index: &str) -> Result<()>;

    fn count(&self, index: &str) -> Result<u64>;
}
