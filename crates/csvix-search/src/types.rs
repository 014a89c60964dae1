//! Wire types for engine responses.

use std::fmt;

use serde::Deserialize;

/// Response to a `_bulk` request.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<BulkItem>,
}

impl BulkResponse {
    /// Per-document results that were rejected by the engine.
    pub fn failures(&self) -> impl Iterator<Item = &BulkItemStatus> {
        self.items
            .iter()
            .filter_map(|item| item.index.as_ref())
            .filter(|status| status.error.is_some() || status.status >= 300)
    }
}

/// One entry of a bulk response; we only ever issue `index` actions.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkItem {
    pub index: Option<BulkItemStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkItemStatus {
    #[serde(default)]
    pub status: u16,
    pub error: Option<BulkError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl fmt::Display for BulkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}: {reason}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Response to a `_count` request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
