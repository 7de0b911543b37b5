//! Error types for the hoop-stats dashboard

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset file missing: {file}")]
    MissingDataset { file: String },

    #[error("Failed to load dataset {file}: {source}")]
    Dataset {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Data directory not found: {}", path.display())]
    DataDirNotFound { path: PathBuf },

    #[error("Unsupported season: {season} (expected one of 2022-23, 2023-24, 2024-25, 2025-26)")]
    InvalidSeason { season: String },

    #[error("Unknown shot zone: {name}")]
    UnknownZone { name: String },
}
