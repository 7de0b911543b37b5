//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{AdvancedColumn, CareerColumn, GameLogColumn, Season, SplitColumn, WinLossFilter};

/// Options every page accepts.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Season to show (2022-23, 2023-24, 2024-25, 2025-26).
    #[clap(long, short, default_value_t = Season::default(), global = true)]
    pub season: Season,

    /// Directory holding the dataset JSON files (or set `HOOP_STATS_DATA_DIR`).
    #[clap(long, env = "HOOP_STATS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output the page as JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log dataset loading and page selection to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Player bio and season averages.
    Dashboard,

    /// Team performance with the player on vs off the court.
    Impact,

    /// Regular-season games, filterable and sortable.
    GameLog {
        /// Only games against this opponent (team abbreviation, e.g. `LAL`).
        #[clap(long, short)]
        opponent: Option<String>,

        /// Only wins (`W`) or losses (`L`).
        #[clap(long)]
        wl: Option<WinLossFilter>,

        /// Sort by column (repeatable). Selecting the active column again
        /// flips its direction: `--sort pts --sort pts`.
        #[clap(long = "sort", value_enum)]
        sort: Vec<GameLogColumn>,
    },

    /// Zone shot chart and shooting splits.
    Shooting {
        /// Also summarize individual shot attempts by zone.
        #[clap(long)]
        shots: bool,
    },

    /// Month-by-month averages.
    Trends,

    /// Home/away, win/loss and starter/bench splits.
    Splits {
        /// Sort the "all splits" table (repeatable).
        #[clap(long = "sort", value_enum)]
        sort: Vec<SplitColumn>,
    },

    /// Season-by-season career progression.
    Career {
        /// Sort the season table (repeatable).
        #[clap(long = "sort", value_enum)]
        sort: Vec<CareerColumn>,
    },

    /// Advanced efficiency and ratings by season.
    Advanced {
        /// Sort the advanced table (repeatable).
        #[clap(long = "sort", value_enum)]
        sort: Vec<AdvancedColumn>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoop-stats", about = "Player statistics dashboard", version)]
pub struct HoopStats {
    #[clap(flatten)]
    pub page: PageArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
