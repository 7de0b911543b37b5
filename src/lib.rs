//! Hoop Stats Library
//!
//! Read-only statistics dashboard for a single basketball player. Precomputed
//! season and game datasets are loaded from a data directory and rendered as
//! pages: dashboard, on/off impact, game log, shooting, trends, splits, career
//! and advanced.
//!
//! ## Components
//!
//! - **Sortable tables** ([`table`]): typed field keys, stable nulls-last
//!   sorting and the click-to-toggle sort state every tabular page shares
//! - **Derived metrics** ([`metrics`]): on/off deltas classified as favorable,
//!   unfavorable or neutral, plus display formatting
//! - **Shot geometry** ([`shots`]): zone lookup, FG% color buckets and the
//!   court-to-display coordinate transform
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoop_stats::{commands::impact::build_impact_view, data::Dataset, Season};
//! use std::path::Path;
//!
//! # fn example() -> hoop_stats::Result<()> {
//! let dataset = Dataset::load(Path::new("/path/to/data"))?;
//! let view = build_impact_view(&dataset, Season::S2024_25);
//! if let Some(impact) = view.impact {
//!     for card in impact.cards {
//!         println!("{}: {}", card.label, card.delta_display);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the dataset directory once instead of passing `--data-dir`:
//! ```bash
//! export HOOP_STATS_DATA_DIR=/path/to/data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod data;
pub mod error;
pub mod metrics;
pub mod shots;
pub mod table;

// Re-export commonly used types
pub use cli::types::Season;
pub use error::{Result, StatsError};

pub const DATA_DIR_ENV_VAR: &str = "HOOP_STATS_DATA_DIR";
