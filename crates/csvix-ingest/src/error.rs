use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("empty CSV file: {path}")]
    EmptyCsv { path: PathBuf },

    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("dataframe error: {message}")]
    Frame { message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
