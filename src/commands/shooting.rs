//! Shooting page: zone shot chart, FG% by area and type, shot events.

use serde::Serialize;
use tracing::debug;

use super::{emit, no_data_message, PageContext};
use crate::{
    data::{Dataset, ShootingRow, ShotDetail},
    metrics::{pct_points, PLACEHOLDER},
    shots::{
        classify_row, find_zone, partition_shots, summarize_zones, ColorBucket, CourtTransform,
        DisplayPoint, Zone, ZoneSummary,
    },
    table::{render_table, Cell, TableView, Tone},
    Result, Season,
};

/// One zone of the shot chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCell {
    pub zone: Zone,
    /// Whole-number FG%, e.g. `"45%"`.
    pub fg_pct: String,
    /// `"FGM/FGA"`, empty without attempts.
    pub volume: String,
    pub bucket: ColorBucket,
    pub color: &'static str,
    pub anchor: DisplayPoint,
}

impl ZoneCell {
    fn new(zone: Zone, row: &ShootingRow) -> Self {
        let bucket = classify_row(row);
        Self {
            zone,
            fg_pct: row
                .fg_pct
                .map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{:.0}%", p * 100.0)),
            volume: row
                .fga
                .map(|fga| format!("{}/{}", row.fgm, fga))
                .unwrap_or_default(),
            bucket,
            color: bucket.color(),
            anchor: zone.anchor(),
        }
    }
}

/// Zones present in `rows`, in court order. Rows with other labels are not
/// shown.
pub fn zone_map(rows: &[ShootingRow]) -> Vec<ZoneCell> {
    Zone::ALL
        .into_iter()
        .filter_map(|zone| find_zone(rows, zone.label()).map(|row| ZoneCell::new(zone, row)))
        .collect()
}

/// Bar chart entry; a null FG% plots as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShootingPoint {
    pub name: String,
    pub fg_pct: f64,
    pub fgm: f64,
    pub fga: f64,
}

pub fn shooting_series(rows: &[ShootingRow]) -> Vec<ShootingPoint> {
    rows.iter()
        .map(|r| ShootingPoint {
            name: r.group_value.clone(),
            fg_pct: pct_points(r.fg_pct.unwrap_or(0.0)),
            fgm: r.fgm,
            fga: r.fga.unwrap_or(0.0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// A shot placed on the court drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotPoint {
    pub x: f64,
    pub y: f64,
    pub made: bool,
    pub zone: String,
    pub action_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotEventsView {
    pub total: usize,
    pub made: usize,
    pub missed: usize,
    pub pct_display: String,
    pub zones: Vec<ZoneSummary>,
    pub points: Vec<ShotPoint>,
}

pub fn shot_events_view(shots: &[ShotDetail], season: Season) -> ShotEventsView {
    let season_shots: Vec<ShotDetail> = shots
        .iter()
        .filter(|s| s.season == season.as_str())
        .cloned()
        .collect();
    let partition = partition_shots(&season_shots);
    let transform = CourtTransform::default();

    ShotEventsView {
        total: partition.total,
        made: partition.made.len(),
        missed: partition.missed.len(),
        pct_display: partition.pct_display.clone(),
        zones: summarize_zones(&season_shots),
        points: season_shots
            .iter()
            .map(|s| {
                let p = transform.to_display(s.loc_x, s.loc_y);
                ShotPoint {
                    x: p.x,
                    y: p.y,
                    made: s.made(),
                    zone: s.shot_zone_basic.clone(),
                    action_type: s.action_type.clone(),
                }
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShootingData {
    pub zones: Vec<ZoneCell>,
    pub legend: Vec<LegendEntry>,
    pub by_area: Vec<ShootingPoint>,
    pub by_type: Vec<ShootingPoint>,
    pub volume: TableView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShootingView {
    pub season: Season,
    pub splits: Option<ShootingData>,
    /// Present only when shot events were requested.
    pub shots: Option<ShotEventsView>,
}

fn plain(text: String) -> Cell {
    Cell {
        text,
        tone: Tone::Plain,
    }
}

fn volume_table(rows: &[ShootingRow]) -> TableView {
    TableView {
        headers: ["Zone", "FGM", "FGA", "FG%"].map(String::from).to_vec(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    plain(r.group_value.clone()),
                    plain(format!("{:.1}", r.fgm)),
                    plain(format!("{:.1}", r.fga.unwrap_or(0.0))),
                    plain(format!("{:.1}%", r.fg_pct.unwrap_or(0.0) * 100.0)),
                ]
            })
            .collect(),
    }
}

pub fn build_shooting_view(dataset: &Dataset, season: Season, with_shots: bool) -> ShootingView {
    let splits = dataset.shooting_splits.get(season).map(|s| ShootingData {
        zones: zone_map(&s.shot_area),
        legend: ColorBucket::LEGEND
            .iter()
            .map(|b| LegendEntry {
                label: b.label(),
                color: b.color(),
            })
            .collect(),
        by_area: shooting_series(&s.shot_area),
        by_type: shooting_series(&s.shot_type),
        volume: volume_table(&s.shot_area),
    });
    let shots = with_shots.then(|| shot_events_view(&dataset.shot_chart.shots, season));
    debug!(%season, has_splits = splits.is_some(), with_shots, "shooting");

    ShootingView {
        season,
        splits,
        shots,
    }
}

fn push_series(out: &mut String, title: &str, points: &[ShootingPoint]) {
    out.push_str(&format!("\n{}\n", title));
    for p in points {
        out.push_str(&format!("  {:<24} {:>5.1}%\n", p.name, p.fg_pct));
    }
}

pub fn render_shooting(view: &ShootingView) -> String {
    let mut out = String::new();
    match &view.splits {
        Some(data) => {
            out.push_str(&format!("Shot chart by zone, {}\n", view.season));
            for z in &data.zones {
                out.push_str(&format!(
                    "  {:<24} {:>5}  {:<9} [{}]\n",
                    z.zone.label(),
                    z.fg_pct,
                    z.volume,
                    z.bucket
                ));
            }
            push_series(&mut out, "FG% by shot area", &data.by_area);
            push_series(&mut out, "FG% by shot type", &data.by_type);
            out.push_str("\nVolume by area\n");
            out.push_str(&render_table(&data.volume));
        }
        None => out.push_str(&no_data_message("shooting", view.season)),
    }

    if let Some(shots) = &view.shots {
        out.push_str(&format!(
            "\nShot attempts: {} made, {} missed of {} ({}%)\n",
            shots.made, shots.missed, shots.total, shots.pct_display
        ));
        for z in &shots.zones {
            out.push_str(&format!(
                "  {:<24} {:>3}/{:<3} [{}]\n",
                z.zone.label(),
                z.made,
                z.attempts,
                z.bucket
            ));
        }
    }
    out
}

pub fn handle_shooting(ctx: &PageContext, with_shots: bool) -> Result<()> {
    let view = build_shooting_view(&ctx.dataset, ctx.season, with_shots);
    emit(&view, ctx.as_json, render_shooting)
}
