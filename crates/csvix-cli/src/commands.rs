use anyhow::{Context, Result};
use tracing::{debug, info_span};

use csvix_ingest::{extract_documents, infer_field_mapping};
use csvix_model::IndexSettings;
use csvix_search::{BulkOptions, SearchClient, SearchConfig};

use csvix_cli::cli::LoadArgs;
use csvix_cli::pipeline::{IngestResult, LoadPlan, ingest, provision_and_load};

use crate::types::LoadResult;

pub fn run_load(args: &LoadArgs) -> Result<LoadResult> {
    let run_span = info_span!("run", index = %args.index, file = %args.file.display());
    let _run_guard = run_span.enter();

    // Stage 1: Ingest
    let IngestResult {
        frame,
        rows,
        time_normalized: _,
    } = ingest(&args.file, args.time_field.as_deref())?;

    // Stage 2: Infer schema
    let settings = IndexSettings::default()
        .with_shards(args.shards)
        .with_replicas(args.replicas);
    let schema = infer_field_mapping(&frame, args.time_field.as_deref(), settings);
    debug!(fields = schema.len(), "schema inferred");

    // Stage 3+4: Provision and load
    let config = search_config(args);
    let client = SearchClient::connect(&config).context("connect to search engine")?;
    let documents = extract_documents(&frame);
    let bulk_options = BulkOptions::default().with_batch_size(args.batch_size);
    let plan = LoadPlan {
        index: &args.index,
        schema: &schema,
        recreate: args.recreate,
        bulk: &bulk_options,
    };
    let outcome = provision_and_load(&client, &plan, &documents)?;

    Ok(LoadResult {
        index: args.index.clone(),
        rows,
        batches: outcome.bulk.batches,
        batch_size: args.batch_size,
        provision: outcome.provision,
        schema,
        indexed_count: outcome.indexed_count,
    })
}

/// Resolve connection settings once, up front, from flags and their
/// environment-backed defaults.
fn search_config(args: &LoadArgs) -> SearchConfig {
    SearchConfig::default()
        .with_host(args.host.clone())
        .with_port(args.port)
        .with_credentials(args.user.clone(), args.password.clone())
        .with_tls(!args.no_tls)
        .with_verify_certs(args.verify_certs)
}
