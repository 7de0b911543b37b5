//! Career page: season-by-season progression.

use serde::Serialize;

use super::{emit, sort_from_requests, PageContext, TableSection};
use crate::{
    cli::types::CareerColumn,
    data::{CareerAdvancedRow, CareerBaseRow, Dataset},
    metrics::{format_number, format_pct, format_plus_minus, pct_points},
    table::{render_table, Column, SortField, SortValue},
    Result,
};

impl SortField<CareerBaseRow> for CareerColumn {
    fn value<'a>(&self, r: &'a CareerBaseRow) -> SortValue<'a> {
        match self {
            CareerColumn::Season => SortValue::Text(&r.group_value),
            CareerColumn::Gp => r.gp.into(),
            CareerColumn::Min => r.min.into(),
            CareerColumn::Pts => r.pts.into(),
            CareerColumn::Reb => r.reb.into(),
            CareerColumn::Ast => r.ast.into(),
            CareerColumn::Stl => r.stl.into(),
            CareerColumn::Blk => r.blk.into(),
            CareerColumn::FgPct => r.fg_pct.into(),
            CareerColumn::Fg3Pct => r.fg3_pct.into(),
            CareerColumn::FtPct => r.ft_pct.into(),
            CareerColumn::PlusMinus => r.plus_minus.into(),
        }
    }
}

fn one(v: f64) -> String {
    format_number(Some(v), 1)
}

pub fn columns() -> Vec<Column<CareerBaseRow, CareerColumn>> {
    use CareerColumn as C;
    vec![
        Column::new(C::Season, "Season", |r: &CareerBaseRow| r.group_value.clone()),
        Column::new(C::Gp, "GP", |r: &CareerBaseRow| r.gp.to_string()),
        Column::new(C::Min, "MIN", |r: &CareerBaseRow| one(r.min)),
        Column::new(C::Pts, "PTS", |r: &CareerBaseRow| one(r.pts)),
        Column::new(C::Reb, "REB", |r: &CareerBaseRow| one(r.reb)),
        Column::new(C::Ast, "AST", |r: &CareerBaseRow| one(r.ast)),
        Column::new(C::Stl, "STL", |r: &CareerBaseRow| one(r.stl)),
        Column::new(C::Blk, "BLK", |r: &CareerBaseRow| one(r.blk)),
        Column::new(C::FgPct, "FG%", |r: &CareerBaseRow| format_pct(r.fg_pct, 1)),
        Column::new(C::Fg3Pct, "3P%", |r: &CareerBaseRow| format_pct(r.fg3_pct, 1)),
        Column::new(C::FtPct, "FT%", |r: &CareerBaseRow| format_pct(r.ft_pct, 1)),
        Column::new(C::PlusMinus, "+/-", |r: &CareerBaseRow| format_plus_minus(r.plus_minus)),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountingPoint {
    pub season: String,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
}

/// Shooting percentages in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShootingPoint {
    pub season: String,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyPoint {
    pub season: String,
    pub ts_pct: Option<f64>,
    pub efg_pct: Option<f64>,
    pub usg_pct: Option<f64>,
    pub net_rating: Option<f64>,
    pub pace: Option<f64>,
}

impl From<&CareerAdvancedRow> for EfficiencyPoint {
    fn from(r: &CareerAdvancedRow) -> Self {
        Self {
            season: r.group_value.clone(),
            ts_pct: r.ts_pct.map(pct_points),
            efg_pct: r.efg_pct.map(pct_points),
            usg_pct: r.usg_pct.map(pct_points),
            net_rating: r.net_rating,
            pace: r.pace,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerSections {
    pub counting: Vec<CountingPoint>,
    pub shooting: Vec<ShootingPoint>,
    pub efficiency: Vec<EfficiencyPoint>,
    pub seasons: TableSection<CareerColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerView {
    /// `None` when there are no career rows.
    pub career: Option<CareerSections>,
}

pub fn build_career_view(dataset: &Dataset, sort: &[CareerColumn]) -> CareerView {
    let base = &dataset.career.base;
    if base.is_empty() {
        return CareerView { career: None };
    }

    let counting = base
        .iter()
        .map(|r| CountingPoint {
            season: r.group_value.clone(),
            pts: r.pts,
            reb: r.reb,
            ast: r.ast,
        })
        .collect();
    let shooting = base
        .iter()
        .map(|r| ShootingPoint {
            season: r.group_value.clone(),
            fg_pct: r.fg_pct.map(pct_points),
            fg3_pct: r.fg3_pct.map(pct_points),
            ft_pct: r.ft_pct.map(pct_points),
        })
        .collect();

    CareerView {
        career: Some(CareerSections {
            counting,
            shooting,
            efficiency: dataset.career.advanced.iter().map(EfficiencyPoint::from).collect(),
            seasons: TableSection::build(&columns(), base, sort_from_requests(None, sort)),
        }),
    }
}

pub fn render_career(view: &CareerView) -> String {
    let Some(career) = &view.career else {
        return "No career data available.\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("Career progression ({} seasons)\n\n", career.seasons.rows));
    out.push_str(&render_table(&career.seasons.table));
    out
}

pub fn handle_career(ctx: &PageContext, sort: &[CareerColumn]) -> Result<()> {
    let view = build_career_view(&ctx.dataset, sort);
    emit(&view, ctx.as_json, render_career)
}
