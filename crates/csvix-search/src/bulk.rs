//! Strict bulk loading with bounded batches.

use tracing::debug;

use csvix_model::Document;

use crate::error::{Result, SearchError};
use crate::interfaces::SearchBackend;

pub const DEFAULT_BATCH_SIZE: usize = 2000;

#[derive(Debug, Clone)]
pub struct BulkOptions {
    /// Upper bound on documents per request; bounds memory and payload
    /// size, not concurrency.
    pub batch_size: usize,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BulkOptions {
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub documents: usize,
    pub batches: usize,
}

/// Encodes one batch as NDJSON: an `index` action line per document,
/// followed by its source payload.
pub fn encode_batch(index: &str, documents: &[Document]) -> Result<String> {
    let mut body = String::new();
    for document in documents {
        let action = serde_json::json!({"index": {"_index": index}});
        body.push_str(&serde_json::to_string(&action)?);
        body.push('\n');
        body.push_str(&serde_json::to_string(document)?);
        body.push('\n');
    }
    Ok(body)
}

/// Transmits all documents to `index` in order, in batches of at most
/// `options.batch_size`.
///
/// Strict mode: any rejected document fails the whole run. Batches already
/// accepted by the engine remain committed; there is no cross-batch
/// transaction.
pub fn bulk_load<B: SearchBackend>(
    backend: &B,
    index: &str,
    documents: &[Document],
    options: &BulkOptions,
) -> Result<BulkSummary> {
    let batch_size = options.batch_size.max(1);
    let mut summary = BulkSummary::default();

    for batch in documents.chunks(batch_size) {
        let sanitized: Vec<Document> = batch.iter().cloned().map(Document::sanitize).collect();
        let body = encode_batch(index, &sanitized)?;
        let response = backend.bulk(index, body)?;

        if response.errors {
            let failed = response.failures().count();
            let first_error = response
                .failures()
                .next()
                .and_then(|status| status.error.as_ref())
                .map(|error| error.to_string())
                .unwrap_or_else(|| "unknown rejection".to_string());
            return Err(SearchError::BulkRejected {
                failed: failed.max(1),
                first_error,
            });
        }

        summary.batches += 1;
        summary.documents += batch.len();
        debug!(
            index,
            batch = summary.batches,
            documents = batch.len(),
            "batch indexed"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvix_model::FieldValue;

    fn doc(id: i64) -> Document {
        let mut document = Document::new();
        document.insert("id", FieldValue::Int(id));
        document
    }

    #[test]
    fn encodes_action_and_source_line_pairs() {
        let documents = vec![doc(1), doc(2)];
        let body = encode_batch("people", &documents).expect("encode");
        assert_eq!(
            body,
            "{\"index\":{\"_index\":\"people\"}}\n{\"id\":1}\n\
             {\"index\":{\"_index\":\"people\"}}\n{\"id\":2}\n"
        );
    }

    #[test]
    fn encodes_missing_values_as_null() {
        let mut document = doc(1);
        document.insert("ts", FieldValue::Missing);
        let body = encode_batch("people", &[document]).expect("encode");
        assert!(body.contains("{\"id\":1,\"ts\":null}"));
    }

    #[test]
    fn empty_batch_encodes_to_empty_body() {
        let body = encode_batch("people", &[]).expect("encode");
        assert!(body.is_empty());
    }
}
