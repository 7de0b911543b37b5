//! Data models for the bundled JSON datasets.
//!
//! Field names follow the upstream upper-case keys. Percentages are stored
//! as fractions. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cli::types::Season;

/// `{"meta": {...}, "data": ...}` wrapper every dataset file uses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub data: T,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub season: Option<String>,
}

/// Season-keyed dataset.
///
/// A season whose key is missing or whose value is `null` has no data; a
/// season present with an empty value is returned as such.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SeasonMap<T>(BTreeMap<String, Option<T>>);

impl<T> SeasonMap<T> {
    pub fn get(&self, season: Season) -> Option<&T> {
        self.0.get(season.as_str()).and_then(Option::as_ref)
    }

    /// Seasons that have data, oldest first.
    pub fn seasons(&self) -> Vec<Season> {
        Season::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_some())
            .collect()
    }
}

impl<T> Default for SeasonMap<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> FromIterator<(Season, Option<T>)> for SeasonMap<T> {
    fn from_iter<I: IntoIterator<Item = (Season, Option<T>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(s, v)| (s.as_str().to_string(), v))
                .collect(),
        )
    }
}

// player_overview.json

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct PlayerInfo {
    pub display_first_last: String,
    pub birthdate: String,
    pub school: String,
    pub country: String,
    pub height: String,
    pub weight: String,
    pub jersey: String,
    pub position: String,
    pub team_name: String,
    pub team_abbreviation: String,
    pub team_city: String,
    pub draft_year: String,
    pub draft_round: String,
    pub draft_number: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PlayerHeadline {
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub pie: f64,
    #[serde(default)]
    pub all_star_appearances: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerOverviewData {
    pub info: PlayerInfo,
    #[serde(default)]
    pub headline: Option<PlayerHeadline>,
}

// game_log.json

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GameLogEntry {
    pub season: String,
    pub season_type: String,
    #[serde(rename = "Game_ID", default)]
    pub game_id: String,
    pub game_date: String,
    pub matchup: String,
    pub wl: String,
    pub min: f64,
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: Option<f64>,
    pub fg3m: f64,
    pub fg3a: f64,
    pub fg3_pct: Option<f64>,
    pub ftm: f64,
    pub fta: f64,
    pub ft_pct: Option<f64>,
    #[serde(default)]
    pub oreb: f64,
    #[serde(default)]
    pub dreb: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    #[serde(default)]
    pub pf: f64,
    pub pts: f64,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameLogData {
    pub games: Vec<GameLogEntry>,
}

// on_off_jokic.json

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OnOffBaseStats {
    #[serde(default)]
    pub court_status: String,
    pub gp: f64,
    #[serde(default)]
    pub w: f64,
    #[serde(default)]
    pub l: f64,
    pub min: f64,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub reb: Option<f64>,
    pub ast: Option<f64>,
    pub tov: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub pts: Option<f64>,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OnOffAdvancedStats {
    #[serde(default)]
    pub court_status: String,
    pub gp: f64,
    pub min: f64,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
    pub net_rating: Option<f64>,
    pub ast_pct: Option<f64>,
    pub reb_pct: Option<f64>,
    pub efg_pct: Option<f64>,
    pub ts_pct: Option<f64>,
    pub pace: Option<f64>,
    pub pie: Option<f64>,
}

/// The two sides of an on/off split; either may be absent. A missing key
/// reads as `None`, same as an explicit `null`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OnOffPair<T> {
    #[serde(rename = "jokic_on")]
    pub on: Option<T>,
    #[serde(rename = "jokic_off")]
    pub off: Option<T>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeasonOnOff {
    #[serde(default)]
    pub base: Option<OnOffPair<OnOffBaseStats>>,
    #[serde(default)]
    pub advanced: Option<OnOffPair<OnOffAdvancedStats>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LineupPairStats {
    #[serde(default)]
    pub group_id: String,
    pub gp: f64,
    pub w: f64,
    pub l: f64,
    pub fg_pct: Option<f64>,
    pub plus_minus: Option<f64>,
    #[serde(default)]
    pub net_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OnOffData {
    #[serde(default)]
    pub on_off: SeasonMap<SeasonOnOff>,
    #[serde(default)]
    pub lineup_pairs: SeasonMap<LineupPairStats>,
}

// general_splits.json

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SplitRow {
    #[serde(default)]
    pub group_set: String,
    pub group_value: String,
    pub gp: f64,
    #[serde(default)]
    pub w: f64,
    #[serde(default)]
    pub l: f64,
    pub min: f64,
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub reb: f64,
    pub ast: f64,
    pub tov: f64,
    pub stl: f64,
    pub blk: f64,
    pub pts: f64,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeasonSplits {
    #[serde(default)]
    pub overall: Vec<SplitRow>,
    #[serde(default)]
    pub location: Vec<SplitRow>,
    #[serde(default)]
    pub win_loss: Vec<SplitRow>,
    #[serde(default)]
    pub month: Vec<SplitRow>,
    #[serde(default)]
    pub pre_post_allstar: Vec<SplitRow>,
    #[serde(default)]
    pub starter_bench: Vec<SplitRow>,
    #[serde(default)]
    pub days_rest: Vec<SplitRow>,
}

pub type GeneralSplitsData = SeasonMap<SeasonSplits>;

// shooting_splits.json

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShootingRow {
    #[serde(default)]
    pub group_set: Option<String>,
    pub group_value: String,
    pub fgm: f64,
    pub fga: Option<f64>,
    pub fg_pct: Option<f64>,
    #[serde(default)]
    pub efg_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeasonShooting {
    #[serde(default)]
    pub shot_type: Vec<ShootingRow>,
    #[serde(default)]
    pub shot_area: Vec<ShootingRow>,
    #[serde(default)]
    pub distance: Vec<ShootingRow>,
    #[serde(default)]
    pub assisted: Vec<ShootingRow>,
}

pub type ShootingSplitsData = SeasonMap<SeasonShooting>;

// career.json

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CareerBaseRow {
    pub group_value: String,
    pub gp: f64,
    pub min: f64,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub pts: f64,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CareerAdvancedRow {
    pub group_value: String,
    pub gp: f64,
    pub min: f64,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
    pub net_rating: Option<f64>,
    pub ts_pct: Option<f64>,
    pub efg_pct: Option<f64>,
    pub usg_pct: Option<f64>,
    pub pace: Option<f64>,
    pub pie: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CareerData {
    #[serde(default)]
    pub base: Vec<CareerBaseRow>,
    #[serde(default)]
    pub advanced: Vec<CareerAdvancedRow>,
}

// shot_chart.json

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShotDetail {
    pub season: String,
    #[serde(default)]
    pub game_date: String,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_made_flag: u8,
    #[serde(default)]
    pub shot_type: String,
    pub shot_zone_basic: String,
    #[serde(default)]
    pub shot_distance: f64,
    #[serde(default)]
    pub action_type: String,
}

impl ShotDetail {
    pub fn made(&self) -> bool {
        self.shot_made_flag != 0
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShotChartData {
    pub shots: Vec<ShotDetail>,
}
