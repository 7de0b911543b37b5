//! Core utilities for the hoop-stats CLI
//!
//! - `paths`: data directory resolution and dataset file reading

pub mod paths;

pub use paths::{dataset_path, default_data_dir, read_dataset, resolve_data_dir};
