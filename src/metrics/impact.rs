//! On/off impact: delta cards, the headline summary, and chart series.

use serde::Serialize;

use super::delta::{MetricDelta, MetricSpec, ValueFormat};
use super::format::{format_signed, pct_points};
use crate::data::{OnOffAdvancedStats, OnOffBaseStats, OnOffPair};

/// Cards shown for the base on/off pair. Every metric is higher-is-better.
pub fn base_metric_specs() -> Vec<MetricSpec<OnOffBaseStats>> {
    vec![
        MetricSpec::raw("Points", |r: &OnOffBaseStats| r.pts),
        MetricSpec::raw("Rebounds", |r: &OnOffBaseStats| r.reb),
        MetricSpec::raw("Assists", |r: &OnOffBaseStats| r.ast),
        MetricSpec::percentage("FG%", |r: &OnOffBaseStats| r.fg_pct),
        MetricSpec::percentage("3P%", |r: &OnOffBaseStats| r.fg3_pct),
        MetricSpec::raw("+/-", |r: &OnOffBaseStats| r.plus_minus).formatted(ValueFormat::PlusMinus),
    ]
}

/// Cards for the advanced pair. Defensive rating is lower-is-better.
pub fn advanced_metric_specs() -> Vec<MetricSpec<OnOffAdvancedStats>> {
    vec![
        MetricSpec::raw("Off Rating", |r: &OnOffAdvancedStats| r.off_rating),
        MetricSpec::raw("Def Rating", |r: &OnOffAdvancedStats| r.def_rating).lower_is_better(),
        MetricSpec::raw("Net Rating", |r: &OnOffAdvancedStats| r.net_rating)
            .formatted(ValueFormat::PlusMinus),
        MetricSpec::percentage("eFG%", |r: &OnOffAdvancedStats| r.efg_pct),
        MetricSpec::percentage("TS%", |r: &OnOffAdvancedStats| r.ts_pct),
    ]
}

pub fn evaluate_pair<T>(specs: &[MetricSpec<T>], pair: Option<&OnOffPair<T>>) -> Vec<MetricDelta> {
    let on = pair.and_then(|p| p.on.as_ref());
    let off = pair.and_then(|p| p.off.as_ref());
    specs.iter().map(|spec| spec.evaluate(on, off)).collect()
}

/// Headline comparison of team efficiency with the player on vs off court.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub ortg_on: f64,
    pub ortg_off: f64,
    pub ortg_diff: f64,
    pub net_on: f64,
    pub net_off: f64,
    pub net_swing: f64,
    pub headline: String,
    pub detail: String,
}

impl ImpactSummary {
    /// `None` unless both sides carry offensive and net ratings.
    pub fn from_advanced(on: &OnOffAdvancedStats, off: &OnOffAdvancedStats) -> Option<Self> {
        let (ortg_on, ortg_off) = (on.off_rating?, off.off_rating?);
        let (net_on, net_off) = (on.net_rating?, off.net_rating?);
        let ortg_diff = ortg_on - ortg_off;
        let net_swing = net_on - net_off;

        let headline = format!(
            "Team scores {:.1} {} points per 100 possessions with the player on court",
            ortg_diff.abs(),
            if ortg_diff > 0.0 { "more" } else { "fewer" }
        );
        let detail = format!(
            "Team net rating: {} on court vs {} off court (swing of {})",
            format_signed(net_on, 1, ""),
            format_signed(net_off, 1, ""),
            format_signed(net_swing, 1, "")
        );

        Some(Self {
            ortg_on,
            ortg_off,
            ortg_diff,
            net_on,
            net_off,
            net_swing,
            headline,
            detail,
        })
    }

    pub fn from_pair(pair: Option<&OnOffPair<OnOffAdvancedStats>>) -> Option<Self> {
        let pair = pair?;
        Self::from_advanced(pair.on.as_ref()?, pair.off.as_ref()?)
    }
}

/// One category of an on/off chart. Absent values stay absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub on: Option<f64>,
    pub off: Option<f64>,
}

impl ChartPoint {
    fn new(
        name: &'static str,
        on: &OnOffAdvancedStats,
        off: &OnOffAdvancedStats,
        field: impl Fn(&OnOffAdvancedStats) -> Option<f64>,
    ) -> Self {
        Self {
            name,
            on: field(on),
            off: field(off),
        }
    }
}

/// Team ratings bar chart series.
pub fn bar_series(on: &OnOffAdvancedStats, off: &OnOffAdvancedStats) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("ORtg", on, off, |r| r.off_rating),
        ChartPoint::new("DRtg", on, off, |r| r.def_rating),
        ChartPoint::new("Net", on, off, |r| r.net_rating),
        ChartPoint::new("eFG%", on, off, |r| r.efg_pct.map(pct_points)),
        ChartPoint::new("AST%", on, off, |r| r.ast_pct),
        ChartPoint::new("REB%", on, off, |r| r.reb_pct),
    ]
}

/// Radar series. Defensive rating is inverted (130 − DRtg) and net rating
/// shifted by +20 so every axis reads higher-is-better on a positive scale.
pub fn radar_series(on: &OnOffAdvancedStats, off: &OnOffAdvancedStats) -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("OFF RTG", on, off, |r| r.off_rating),
        ChartPoint::new("DEF RTG", on, off, |r| r.def_rating.map(|d| 130.0 - d)),
        ChartPoint::new("NET RTG", on, off, |r| r.net_rating.map(|n| n + 20.0)),
        ChartPoint::new("eFG%", on, off, |r| r.efg_pct.map(|e| e * 100.0)),
        ChartPoint::new("AST%", on, off, |r| r.ast_pct),
        ChartPoint::new("REB%", on, off, |r| r.reb_pct),
    ]
}
