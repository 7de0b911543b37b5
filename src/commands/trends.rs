//! Monthly trends page.

use serde::Serialize;
use tracing::debug;

use super::{emit, no_data_message, PageContext};
use crate::{
    data::{Dataset, SplitRow},
    metrics::{pct_points, PLACEHOLDER},
    Result, Season,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPoint {
    pub month: String,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    /// Percentage points, one decimal.
    pub fg_pct: Option<f64>,
    pub gp: f64,
}

impl From<&SplitRow> for MonthPoint {
    fn from(row: &SplitRow) -> Self {
        Self {
            month: row.group_value.clone(),
            pts: row.pts,
            reb: row.reb,
            ast: row.ast,
            fg_pct: row.fg_pct.map(pct_points),
            gp: row.gp,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendsView {
    pub season: Season,
    /// `None` when the season has no splits at all; empty when it has no
    /// monthly split.
    pub months: Option<Vec<MonthPoint>>,
}

pub fn build_trends_view(dataset: &Dataset, season: Season) -> TrendsView {
    let months: Option<Vec<MonthPoint>> = dataset
        .general_splits
        .get(season)
        .map(|s| s.month.iter().map(MonthPoint::from).collect());
    debug!(%season, months = ?months.as_ref().map(Vec::len), "trends");
    TrendsView { season, months }
}

pub fn render_trends(view: &TrendsView) -> String {
    let months = match &view.months {
        Some(months) if !months.is_empty() => months,
        _ => return no_data_message("monthly", view.season),
    };

    let mut out = String::new();
    out.push_str(&format!("Monthly trends, {}\n", view.season));
    out.push_str(&format!(
        "  {:<10} {:>3} {:>6} {:>6} {:>6} {:>6}\n",
        "Month", "GP", "PTS", "REB", "AST", "FG%"
    ));
    for m in months {
        let fg = m
            .fg_pct
            .map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{:.1}", p));
        out.push_str(&format!(
            "  {:<10} {:>3} {:>6.1} {:>6.1} {:>6.1} {:>6}\n",
            m.month, m.gp, m.pts, m.reb, m.ast, fg
        ));
    }
    out
}

pub fn handle_trends(ctx: &PageContext) -> Result<()> {
    let view = build_trends_view(&ctx.dataset, ctx.season);
    emit(&view, ctx.as_json, render_trends)
}
