//! Designated time-column normalization.
//!
//! Values in the designated column are reinterpreted as timestamps and
//! rewritten to the canonical `YYYY-MM-DDTHH:MM:SSZ` form; values that do
//! not parse become absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::convert::any_to_string;
use crate::error::{IngestError, Result};

/// Canonical timestamp form stored in the index.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a timestamp string in any accepted form.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Normalizes a timestamp string to canonical form, or None if unparseable.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format(CANONICAL_FORMAT).to_string())
}

/// Rewrites the named column in place to canonical timestamp strings.
///
/// Returns false without touching the frame when the column does not exist.
/// Unparseable and null values become null.
pub fn normalize_time_column(df: &mut DataFrame, column: &str) -> Result<bool> {
    let Some(source) = df.column(column).ok().cloned() else {
        return Ok(false);
    };

    let mut converted = 0usize;
    let mut dropped = 0usize;
    let mut values: Vec<Option<String>> = Vec::with_capacity(source.len());
    for idx in 0..source.len() {
        let value = source.get(idx).unwrap_or(AnyValue::Null);
        let normalized = match value {
            AnyValue::Null => None,
            other => normalize_timestamp(&any_to_string(other)),
        };
        match &normalized {
            Some(_) => converted += 1,
            None => dropped += 1,
        }
        values.push(normalized);
    }

    let series = Series::new(column.into(), values);
    df.with_column(series.into_column())
        .map_err(|e| IngestError::Frame {
            message: e.to_string(),
        })?;

    debug!(column, converted, dropped, "time column normalized");
    Ok(true)
}
