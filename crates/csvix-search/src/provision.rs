//! Index provisioning: ensure the target index exists with the given schema.

use tracing::{info, warn};

use csvix_model::IndexSchema;

use crate::error::Result;
use crate::interfaces::SearchBackend;

/// What [`ensure_index`] did to the remote index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The index did not exist and was created.
    Created,
    /// The index existed, was deleted, and was created anew.
    Recreated,
    /// The index existed and was left untouched. The existing schema is NOT
    /// reconciled against the requested one; mismatches across repeated runs
    /// are the caller's responsibility.
    Unchanged,
}

impl ProvisionOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            ProvisionOutcome::Created => "created",
            ProvisionOutcome::Recreated => "recreated",
            ProvisionOutcome::Unchanged => "unchanged",
        }
    }
}

/// Ensures `index` exists with `schema`.
///
/// With `recreate`, an existing index is deleted unconditionally first,
/// destroying prior documents. Without it, an existing index is a no-op.
pub fn ensure_index<B: SearchBackend>(
    backend: &B,
    index: &str,
    schema: &IndexSchema,
    recreate: bool,
) -> Result<ProvisionOutcome> {
    let existed = backend.index_exists(index)?;

    if recreate && existed {
        warn!(index, "deleting existing index");
        backend.delete_index(index)?;
        backend.create_index(index, schema)?;
        info!(index, fields = schema.len(), "index recreated");
        return Ok(ProvisionOutcome::Recreated);
    }

    if existed {
        info!(index, "index already exists, schema left as-is");
        return Ok(ProvisionOutcome::Unchanged);
    }

    backend.create_index(index, schema)?;
    info!(index, fields = schema.len(), "index created");
    Ok(ProvisionOutcome::Created)
}
