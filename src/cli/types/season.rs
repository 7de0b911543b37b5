//! Season keys for the bundled datasets.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four seasons the bundled datasets cover.
///
/// Every per-season dataset is keyed by the season's label (`"2024-25"`), so
/// this enum is the only way page logic addresses season data.
///
/// # Examples
///
/// ```rust
/// use hoop_stats::Season;
///
/// let season: Season = "2023-24".parse().unwrap();
/// assert_eq!(season, Season::S2023_24);
/// assert_eq!(season.to_string(), "2023-24");
/// assert!("2019-20".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "2022-23")]
    S2022_23,
    #[serde(rename = "2023-24")]
    S2023_24,
    #[serde(rename = "2024-25")]
    S2024_25,
    #[serde(rename = "2025-26")]
    S2025_26,
}

impl Season {
    /// All supported seasons, oldest first.
    pub const ALL: [Season; 4] = [
        Season::S2022_23,
        Season::S2023_24,
        Season::S2024_25,
        Season::S2025_26,
    ];

    /// Dataset key for this season.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::S2022_23 => "2022-23",
            Season::S2023_24 => "2023-24",
            Season::S2024_25 => "2024-25",
            Season::S2025_26 => "2025-26",
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Season::S2024_25
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s.trim())
            .ok_or_else(|| StatsError::InvalidSeason {
                season: s.to_string(),
            })
    }
}
