//! Filter types for hoop-stats CLI commands.

use std::fmt;

/// Game result filter for the game log page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WinLossFilter {
    /// Wins only
    #[value(name = "W", alias = "w")]
    Win,
    /// Losses only
    #[value(name = "L", alias = "l")]
    Loss,
}

impl WinLossFilter {
    /// Whether a game's `WL` value passes this filter.
    pub fn matches(&self, wl: &str) -> bool {
        match self {
            WinLossFilter::Win => wl == "W",
            WinLossFilter::Loss => wl == "L",
        }
    }
}

impl fmt::Display for WinLossFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinLossFilter::Win => "W",
            WinLossFilter::Loss => "L",
        };
        write!(f, "{}", s)
    }
}
