//! Read-only datasets the dashboard pages consume.
//!
//! - `types`: serde models for each bundled JSON file
//! - `loader`: reads and parses a dataset file from the data directory

pub mod loader;
pub mod types;


pub use loader::{load_dataset, Dataset};
pub use types::*;

pub const PLAYER_OVERVIEW_FILE: &str = "player_overview.json";
pub const GAME_LOG_FILE: &str = "game_log.json";
pub const ON_OFF_FILE: &str = "on_off_jokic.json";
pub const GENERAL_SPLITS_FILE: &str = "general_splits.json";
pub const SHOOTING_SPLITS_FILE: &str = "shooting_splits.json";
pub const CAREER_FILE: &str = "career.json";
pub const SHOT_CHART_FILE: &str = "shot_chart.json";

/// Season type of the games the game log page shows.
pub const REGULAR_SEASON: &str = "Regular Season";
