//! Advanced stats page: efficiency and ratings by season.

use serde::Serialize;

use super::{emit, sort_from_requests, PageContext, TableSection};
use crate::{
    cli::types::AdvancedColumn,
    data::{CareerAdvancedRow, Dataset},
    metrics::{format_number, format_pct, format_plus_minus, pct_points},
    table::{render_table, Column, SortField, SortValue},
    Result,
};

impl SortField<CareerAdvancedRow> for AdvancedColumn {
    fn value<'a>(&self, r: &'a CareerAdvancedRow) -> SortValue<'a> {
        match self {
            AdvancedColumn::Season => SortValue::Text(&r.group_value),
            AdvancedColumn::OffRtg => r.off_rating.into(),
            AdvancedColumn::DefRtg => r.def_rating.into(),
            AdvancedColumn::NetRtg => r.net_rating.into(),
            AdvancedColumn::TsPct => r.ts_pct.into(),
            AdvancedColumn::EfgPct => r.efg_pct.into(),
            AdvancedColumn::UsgPct => r.usg_pct.into(),
            AdvancedColumn::Pace => r.pace.into(),
            AdvancedColumn::Pie => r.pie.into(),
        }
    }
}

pub fn columns() -> Vec<Column<CareerAdvancedRow, AdvancedColumn>> {
    use AdvancedColumn as C;
    vec![
        Column::new(C::Season, "Season", |r: &CareerAdvancedRow| r.group_value.clone()),
        Column::new(C::OffRtg, "OFF RTG", |r: &CareerAdvancedRow| format_number(r.off_rating, 1)),
        Column::new(C::DefRtg, "DEF RTG", |r: &CareerAdvancedRow| format_number(r.def_rating, 1)),
        Column::new(C::NetRtg, "NET RTG", |r: &CareerAdvancedRow| format_plus_minus(r.net_rating)),
        Column::new(C::TsPct, "TS%", |r: &CareerAdvancedRow| format_pct(r.ts_pct, 1)),
        Column::new(C::EfgPct, "eFG%", |r: &CareerAdvancedRow| format_pct(r.efg_pct, 1)),
        Column::new(C::UsgPct, "USG%", |r: &CareerAdvancedRow| format_pct(r.usg_pct, 1)),
        Column::new(C::Pace, "PACE", |r: &CareerAdvancedRow| format_number(r.pace, 1)),
        Column::new(C::Pie, "PIE", |r: &CareerAdvancedRow| format_pct(r.pie, 1)),
    ]
}

/// Efficiency series in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyPoint {
    pub season: String,
    pub ts_pct: Option<f64>,
    pub efg_pct: Option<f64>,
    pub usg_pct: Option<f64>,
    pub pie: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub season: String,
    pub off_rating: Option<f64>,
    pub def_rating: Option<f64>,
    pub net_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedSections {
    pub efficiency: Vec<EfficiencyPoint>,
    pub ratings: Vec<RatingPoint>,
    pub table: TableSection<AdvancedColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedView {
    /// `None` when there are no advanced rows.
    pub advanced: Option<AdvancedSections>,
}

pub fn build_advanced_view(dataset: &Dataset, sort: &[AdvancedColumn]) -> AdvancedView {
    let rows = &dataset.career.advanced;
    if rows.is_empty() {
        return AdvancedView { advanced: None };
    }

    AdvancedView {
        advanced: Some(AdvancedSections {
            efficiency: rows
                .iter()
                .map(|r| EfficiencyPoint {
                    season: r.group_value.clone(),
                    ts_pct: r.ts_pct.map(pct_points),
                    efg_pct: r.efg_pct.map(pct_points),
                    usg_pct: r.usg_pct.map(pct_points),
                    pie: r.pie.map(pct_points),
                })
                .collect(),
            ratings: rows
                .iter()
                .map(|r| RatingPoint {
                    season: r.group_value.clone(),
                    off_rating: r.off_rating,
                    def_rating: r.def_rating,
                    net_rating: r.net_rating,
                })
                .collect(),
            table: TableSection::build(&columns(), rows, sort_from_requests(None, sort)),
        }),
    }
}

pub fn render_advanced(view: &AdvancedView) -> String {
    let Some(advanced) = &view.advanced else {
        return "No advanced data available.\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("Advanced stats ({} seasons)\n\n", advanced.table.rows));
    out.push_str(&render_table(&advanced.table.table));
    out
}

pub fn handle_advanced(ctx: &PageContext, sort: &[AdvancedColumn]) -> Result<()> {
    let view = build_advanced_view(&ctx.dataset, sort);
    emit(&view, ctx.as_json, render_advanced)
}
