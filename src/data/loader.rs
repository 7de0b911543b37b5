//! Dataset loading from the data directory.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use super::types::*;
use super::{
    CAREER_FILE, GAME_LOG_FILE, GENERAL_SPLITS_FILE, ON_OFF_FILE, PLAYER_OVERVIEW_FILE,
    SHOOTING_SPLITS_FILE, SHOT_CHART_FILE,
};
use crate::{
    core::read_dataset,
    error::StatsError,
    Result,
};

/// Read `file` from `dir` and unwrap its `{meta, data}` envelope.
pub fn load_dataset<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Envelope<T>> {
    let text = read_dataset(dir, file)?;

    let envelope: Envelope<T> =
        serde_json::from_str(&text).map_err(|source| StatsError::Dataset {
            file: file.to_string(),
            source,
        })?;

    debug!(
        file,
        bytes = text.len(),
        generated_at = %envelope.meta.generated_at,
        "loaded dataset"
    );
    Ok(envelope)
}

/// Every bundled dataset, loaded up front.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub generated_at: String,
    pub overview: PlayerOverviewData,
    pub game_log: GameLogData,
    pub on_off: OnOffData,
    pub general_splits: GeneralSplitsData,
    pub shooting_splits: ShootingSplitsData,
    pub career: CareerData,
    pub shot_chart: ShotChartData,
}

impl Dataset {
    /// Load all seven files. Any missing or malformed file fails the load.
    pub fn load(dir: &Path) -> Result<Self> {
        let overview = load_dataset::<PlayerOverviewData>(dir, PLAYER_OVERVIEW_FILE)?;
        let game_log = load_dataset::<GameLogData>(dir, GAME_LOG_FILE)?;
        debug!(games = game_log.data.games.len(), "game log rows");
        let shot_chart = load_dataset::<ShotChartData>(dir, SHOT_CHART_FILE)?;
        debug!(shots = shot_chart.data.shots.len(), "shot events");

        Ok(Self {
            generated_at: overview.meta.generated_at.clone(),
            overview: overview.data,
            game_log: game_log.data,
            on_off: load_dataset::<OnOffData>(dir, ON_OFF_FILE)?.data,
            general_splits: load_dataset::<GeneralSplitsData>(dir, GENERAL_SPLITS_FILE)?.data,
            shooting_splits: load_dataset::<ShootingSplitsData>(dir, SHOOTING_SPLITS_FILE)?
                .data,
            career: load_dataset::<CareerData>(dir, CAREER_FILE)?.data,
            shot_chart: shot_chart.data,
        })
    }
}
