//! Splits page: home/away, win/loss and a sortable table of every split.

use serde::Serialize;
use tracing::debug;

use super::{emit, no_data_message, sort_from_requests, PageContext, TableSection};
use crate::{
    cli::types::SplitColumn,
    data::{Dataset, SplitRow},
    metrics::{format_number, format_pct, format_plus_minus},
    table::{render_table, Column, SortField, SortValue},
    Result, Season,
};

impl SortField<SplitRow> for SplitColumn {
    fn value<'a>(&self, r: &'a SplitRow) -> SortValue<'a> {
        match self {
            SplitColumn::Split => SortValue::Text(&r.group_value),
            SplitColumn::Gp => r.gp.into(),
            SplitColumn::Pts => r.pts.into(),
            SplitColumn::Reb => r.reb.into(),
            SplitColumn::Ast => r.ast.into(),
            SplitColumn::FgPct => r.fg_pct.into(),
            SplitColumn::Fg3Pct => r.fg3_pct.into(),
            SplitColumn::PlusMinus => r.plus_minus.into(),
        }
    }
}

pub fn columns() -> Vec<Column<SplitRow, SplitColumn>> {
    use SplitColumn as C;
    vec![
        Column::new(C::Split, "Split", |r: &SplitRow| r.group_value.clone()),
        Column::new(C::Gp, "GP", |r: &SplitRow| r.gp.to_string()),
        Column::new(C::Pts, "PTS", |r: &SplitRow| format_number(Some(r.pts), 1)),
        Column::new(C::Reb, "REB", |r: &SplitRow| format_number(Some(r.reb), 1)),
        Column::new(C::Ast, "AST", |r: &SplitRow| format_number(Some(r.ast), 1)),
        Column::new(C::FgPct, "FG%", |r: &SplitRow| format_pct(r.fg_pct, 1)),
        Column::new(C::Fg3Pct, "3P%", |r: &SplitRow| format_pct(r.fg3_pct, 1)),
        Column::new(C::PlusMinus, "+/-", |r: &SplitRow| format_plus_minus(r.plus_minus)),
    ]
}

/// Grouped bar entry (PTS/REB/AST) for one split value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitPoint {
    pub name: String,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
}

fn split_series(rows: &[SplitRow]) -> Vec<SplitPoint> {
    rows.iter()
        .map(|r| SplitPoint {
            name: r.group_value.clone(),
            pts: r.pts,
            reb: r.reb,
            ast: r.ast,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitsData {
    pub home_away: Vec<SplitPoint>,
    /// Empty when the season has no win/loss split.
    pub win_loss: Vec<SplitPoint>,
    pub all_splits: TableSection<SplitColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitsView {
    pub season: Season,
    pub splits: Option<SplitsData>,
}

pub fn build_splits_view(dataset: &Dataset, season: Season, sort: &[SplitColumn]) -> SplitsView {
    let splits = dataset.general_splits.get(season).map(|s| {
        let all_rows: Vec<SplitRow> = s
            .location
            .iter()
            .chain(&s.win_loss)
            .chain(&s.starter_bench)
            .cloned()
            .collect();
        debug!(%season, rows = all_rows.len(), "splits");

        SplitsData {
            home_away: split_series(&s.location),
            win_loss: split_series(&s.win_loss),
            all_splits: TableSection::build(&columns(), &all_rows, sort_from_requests(None, sort)),
        }
    });
    SplitsView { season, splits }
}

fn push_series(out: &mut String, title: &str, points: &[SplitPoint]) {
    if points.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", title));
    for p in points {
        out.push_str(&format!(
            "  {:<12} PTS {:>5.1}  REB {:>5.1}  AST {:>5.1}\n",
            p.name, p.pts, p.reb, p.ast
        ));
    }
    out.push('\n');
}

pub fn render_splits(view: &SplitsView) -> String {
    let Some(data) = &view.splits else {
        return no_data_message("split", view.season);
    };

    let mut out = String::new();
    out.push_str(&format!("Splits, {}\n\n", view.season));
    push_series(&mut out, "Home vs away", &data.home_away);
    push_series(&mut out, "Wins vs losses", &data.win_loss);
    out.push_str("All splits\n");
    out.push_str(&render_table(&data.all_splits.table));
    out
}

pub fn handle_splits(ctx: &PageContext, sort: &[SplitColumn]) -> Result<()> {
    let view = build_splits_view(&ctx.dataset, ctx.season, sort);
    emit(&view, ctx.as_json, render_splits)
}
