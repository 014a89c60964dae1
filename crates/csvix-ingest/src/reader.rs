//! CSV file reading into a Polars DataFrame.

use std::path::Path;

use polars::prelude::CsvReadOptions;
use polars::prelude::DataFrame;
use polars::prelude::SerReader;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Number of leading rows scanned to infer per-column dtypes.
const SCHEMA_INFERENCE_ROWS: usize = 100;

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Column dtypes are inferred from the data; a missing file is reported
/// before any reader is constructed so input errors always precede remote
/// side effects.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(SCHEMA_INFERENCE_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    Ok(df)
}
