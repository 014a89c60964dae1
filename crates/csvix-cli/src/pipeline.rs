//! Load pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the source CSV, optionally normalize the time column
//! 2. **Infer**: Derive the index schema from column dtypes
//! 3. **Provision**: Ensure the target index exists with that schema
//! 4. **Load**: Bulk-load documents, refresh, read back the index count
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Everything runs sequentially on one thread; a failed run must be
//! restarted from the beginning.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use csvix_ingest::{normalize_time_column, read_csv};
use csvix_model::{Document, IndexSchema};
use csvix_search::{
    BulkOptions, BulkSummary, ProvisionOutcome, SearchBackend, bulk_load, ensure_index,
};

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// The loaded table, with the time column already normalized.
    pub frame: DataFrame,
    /// Number of source rows.
    pub rows: usize,
    /// Whether the designated time column was found and rewritten.
    pub time_normalized: bool,
}

/// Read the source CSV and normalize the designated time column.
///
/// Input errors surface here, before any remote side effect.
pub fn ingest(file: &Path, time_field: Option<&str>) -> Result<IngestResult> {
    let ingest_span = info_span!("ingest", file = %file.display());
    let _ingest_guard = ingest_span.enter();
    let start = Instant::now();

    let mut frame = read_csv(file).with_context(|| format!("read {}", file.display()))?;
    let rows = frame.height();

    let mut time_normalized = false;
    if let Some(column) = time_field {
        time_normalized = normalize_time_column(&mut frame, column)
            .with_context(|| format!("normalize time column '{column}'"))?;
        if !time_normalized {
            warn!(column, "time field not present in input, skipping normalization");
        }
    }

    info!(
        rows,
        columns = frame.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        frame,
        rows,
        time_normalized,
    })
}

/// Everything the provision and load stages need, resolved up front.
pub struct LoadPlan<'a> {
    pub index: &'a str,
    pub schema: &'a IndexSchema,
    pub recreate: bool,
    pub bulk: &'a BulkOptions,
}

/// Result of the provision and load stages.
pub struct LoadOutcome {
    pub provision: ProvisionOutcome,
    pub bulk: BulkSummary,
    /// Post-load document count as observed by the index: a verification
    /// read-back, not an echo of the input size.
    pub indexed_count: u64,
}

/// Provision the index, transmit all documents, refresh, and read back the
/// document count.
pub fn provision_and_load<B: SearchBackend>(
    backend: &B,
    plan: &LoadPlan<'_>,
    documents: &[Document],
) -> Result<LoadOutcome> {
    let provision_span = info_span!("provision", index = plan.index);
    let provision_start = Instant::now();
    let provision = provision_span
        .in_scope(|| ensure_index(backend, plan.index, plan.schema, plan.recreate))
        .context("provision index")?;
    info!(
        index = plan.index,
        outcome = provision.describe(),
        duration_ms = provision_start.elapsed().as_millis(),
        "provision complete"
    );

    let load_span = info_span!("load", index = plan.index);
    let _load_guard = load_span.enter();
    let load_start = Instant::now();

    let bulk = bulk_load(backend, plan.index, documents, plan.bulk).context("bulk load")?;
    backend.refresh(plan.index).context("refresh index")?;
    let indexed_count = backend
        .count(plan.index)
        .context("read back index count")?;

    info!(
        index = plan.index,
        documents = bulk.documents,
        batches = bulk.batches,
        indexed_count,
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    Ok(LoadOutcome {
        provision,
        bulk,
        indexed_count,
    })
}
