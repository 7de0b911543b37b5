//! Shot geometry: court zones, FG% color buckets and display coordinates.
//!
//! Zone aggregates come from `shooting_splits.json` (`shot_area` rows) and
//! individual attempts from `shot_chart.json`. Both are keyed by the same
//! six zone labels; anything else is ignored.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::data::{ShootingRow, ShotDetail};
use crate::error::StatsError;


/// The six half-court zones shots are aggregated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Zone {
    #[serde(rename = "Restricted Area")]
    RestrictedArea,
    #[serde(rename = "In The Paint (Non-RA)")]
    Paint,
    #[serde(rename = "Mid-Range")]
    MidRange,
    #[serde(rename = "Left Corner 3")]
    LeftCorner3,
    #[serde(rename = "Right Corner 3")]
    RightCorner3,
    #[serde(rename = "Above the Break 3")]
    AboveTheBreak3,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::RestrictedArea,
        Zone::Paint,
        Zone::MidRange,
        Zone::LeftCorner3,
        Zone::RightCorner3,
        Zone::AboveTheBreak3,
    ];

    /// Label used as `GROUP_VALUE` / `SHOT_ZONE_BASIC` in the datasets.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::RestrictedArea => "Restricted Area",
            Zone::Paint => "In The Paint (Non-RA)",
            Zone::MidRange => "Mid-Range",
            Zone::LeftCorner3 => "Left Corner 3",
            Zone::RightCorner3 => "Right Corner 3",
            Zone::AboveTheBreak3 => "Above the Break 3",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| z.label() == label)
    }

    /// Where the zone's FG% label sits on the 500x400 court drawing.
    pub fn anchor(&self) -> DisplayPoint {
        let (x, y) = match self {
            Zone::RestrictedArea => (250.0, 350.0),
            Zone::Paint => (250.0, 285.0),
            Zone::MidRange => (250.0, 185.0),
            Zone::LeftCorner3 => (70.0, 340.0),
            Zone::RightCorner3 => (430.0, 340.0),
            Zone::AboveTheBreak3 => (250.0, 85.0),
        };
        DisplayPoint { x, y }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Zone {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::from_label(s).ok_or_else(|| StatsError::UnknownZone {
            name: s.to_string(),
        })
    }
}

/// FG% color bucket. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Below35,
    From35To39,
    From40To44,
    From45To49,
    AtLeast50,
    NoData,
}

impl ColorBucket {
    /// The five data buckets in legend order.
    pub const LEGEND: [ColorBucket; 5] = [
        ColorBucket::Below35,
        ColorBucket::From35To39,
        ColorBucket::From40To44,
        ColorBucket::From45To49,
        ColorBucket::AtLeast50,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorBucket::Below35 => "<35%",
            ColorBucket::From35To39 => "35-39%",
            ColorBucket::From40To44 => "40-44%",
            ColorBucket::From45To49 => "45-49%",
            ColorBucket::AtLeast50 => "50%+",
            ColorBucket::NoData => "No data",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ColorBucket::Below35 => "#ef4444",
            ColorBucket::From35To39 => "#fb923c",
            ColorBucket::From40To44 => "#fbbf24",
            ColorBucket::From45To49 => "#4ade80",
            ColorBucket::AtLeast50 => "#22c55e",
            ColorBucket::NoData => "#e2e8f0",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bucket a fractional FG%. `None` and exactly zero have no data.
///
/// Cut-offs are compared in fraction space so that `0.35` lands in the
/// 35-39% bucket rather than rounding below it.
pub fn classify(pct: Option<f64>) -> ColorBucket {
    match pct {
        None => ColorBucket::NoData,
        Some(p) if p == 0.0 || p.is_nan() => ColorBucket::NoData,
        Some(p) if p >= 0.50 => ColorBucket::AtLeast50,
        Some(p) if p >= 0.45 => ColorBucket::From45To49,
        Some(p) if p >= 0.40 => ColorBucket::From40To44,
        Some(p) if p >= 0.35 => ColorBucket::From35To39,
        Some(_) => ColorBucket::Below35,
    }
}

/// Bucket a zone aggregate; a row with no attempts has no data.
pub fn classify_row(row: &ShootingRow) -> ColorBucket {
    match row.fga {
        Some(fga) if fga > 0.0 => classify(row.fg_pct),
        _ => ColorBucket::NoData,
    }
}

/// Find the aggregate row for `name`. Missing zones are `None`.
pub fn find_zone<'a>(rows: &'a [ShootingRow], name: &str) -> Option<&'a ShootingRow> {
    rows.iter().find(|r| r.group_value == name)
}

/// A point in display space: origin top-left, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

/// Affine map from court coordinates (tenths of a foot, basket at the
/// origin, y toward half court) to the 500x400 court drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    /// Display position of the basket.
    pub basket: DisplayPoint,
}

impl Default for CourtTransform {
    fn default() -> Self {
        Self {
            scale_x: 0.8,
            scale_y: 0.8,
            basket: DisplayPoint { x: 250.0, y: 360.0 },
        }
    }
}

impl CourtTransform {
    pub const VIEW_WIDTH: f64 = 500.0;
    pub const VIEW_HEIGHT: f64 = 400.0;

    pub fn to_display(&self, x: f64, y: f64) -> DisplayPoint {
        DisplayPoint {
            x: self.basket.x + x * self.scale_x,
            y: self.basket.y - y * self.scale_y,
        }
    }
}

/// [`CourtTransform::to_display`] with the default court drawing.
pub fn to_display_coords(x: f64, y: f64) -> (f64, f64) {
    let p = CourtTransform::default().to_display(x, y);
    (p.x, p.y)
}

/// Distance from the basket in feet, rounded to the nearest foot.
pub fn shot_distance(x: f64, y: f64) -> f64 {
    ((x * x + y * y).sqrt() / 10.0).round()
}

/// Made/missed split of a set of attempts.
#[derive(Debug, Clone, Serialize)]
pub struct ShotPartition<'a> {
    pub made: Vec<&'a ShotDetail>,
    pub missed: Vec<&'a ShotDetail>,
    pub total: usize,
    /// `made / total`; `None` with no attempts.
    pub pct: Option<f64>,
    /// One decimal in percentage points, or `"0"` with no attempts.
    pub pct_display: String,
}

pub fn partition_shots(shots: &[ShotDetail]) -> ShotPartition<'_> {
    let (made, missed): (Vec<&ShotDetail>, Vec<&ShotDetail>) =
        shots.iter().partition(|s| s.made());
    let total = shots.len();

    let pct = (total > 0).then(|| made.len() as f64 / total as f64);
    let pct_display = match pct {
        Some(p) => format!("{:.1}", p * 100.0),
        None => "0".to_string(),
    };

    ShotPartition {
        made,
        missed,
        total,
        pct,
        pct_display,
    }
}

/// Attempts and makes in one zone, tallied from individual shots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub zone: Zone,
    pub attempts: usize,
    pub made: usize,
    pub fg_pct: Option<f64>,
    pub bucket: ColorBucket,
}

/// Tally shots per zone, in [`Zone::ALL`] order. Zones without attempts are
/// reported with zero counts; shots outside the six zones are skipped.
pub fn summarize_zones(shots: &[ShotDetail]) -> Vec<ZoneSummary> {
    let mut tallies: BTreeMap<Zone, (usize, usize)> = BTreeMap::new();
    let mut skipped: BTreeMap<&str, usize> = BTreeMap::new();

    for shot in shots {
        match Zone::from_label(&shot.shot_zone_basic) {
            Some(zone) => {
                let entry = tallies.entry(zone).or_default();
                entry.0 += 1;
                if shot.made() {
                    entry.1 += 1;
                }
            }
            None => *skipped.entry(shot.shot_zone_basic.as_str()).or_default() += 1,
        }
    }

    for (name, count) in &skipped {
        warn!(zone = %name, count, "skipping shots outside the six court zones");
    }

    Zone::ALL
        .into_iter()
        .map(|zone| {
            let (attempts, made) = tallies.get(&zone).copied().unwrap_or_default();
            let fg_pct = (attempts > 0).then(|| made as f64 / attempts as f64);
            ZoneSummary {
                zone,
                attempts,
                made,
                fg_pct,
                bucket: classify(fg_pct),
            }
        })
        .collect()
}
