//! Game log page: regular-season games with filters and a sortable table.

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use super::{emit, no_data_message, sort_from_requests, PageContext, TableSection};
use crate::{
    cli::types::{GameLogColumn, WinLossFilter},
    data::{Dataset, GameLogEntry, REGULAR_SEASON},
    metrics::{format_date, format_number, format_pct, format_plus_minus, opponent, parse_game_date},
    table::{render_table, Column, SortDirection, SortField, SortState, SortValue},
    Result, Season,
};

impl SortField<GameLogEntry> for GameLogColumn {
    fn value<'a>(&self, g: &'a GameLogEntry) -> SortValue<'a> {
        match self {
            // Dates compare chronologically whatever their text layout.
            GameLogColumn::Date => parse_game_date(&g.game_date)
                .map(|d| SortValue::Number(f64::from(d.num_days_from_ce())))
                .unwrap_or(SortValue::Text(&g.game_date)),
            GameLogColumn::Matchup => SortValue::Text(&g.matchup),
            GameLogColumn::Wl => SortValue::Text(&g.wl),
            GameLogColumn::Min => g.min.into(),
            GameLogColumn::Pts => g.pts.into(),
            GameLogColumn::Reb => g.reb.into(),
            GameLogColumn::Ast => g.ast.into(),
            GameLogColumn::FgPct => g.fg_pct.into(),
            GameLogColumn::Fg3Pct => g.fg3_pct.into(),
            GameLogColumn::Stl => g.stl.into(),
            GameLogColumn::Blk => g.blk.into(),
            GameLogColumn::Tov => g.tov.into(),
            GameLogColumn::PlusMinus => g.plus_minus.into(),
        }
    }
}

fn count(v: f64) -> String {
    format_number(Some(v), 0)
}

pub fn columns() -> Vec<Column<GameLogEntry, GameLogColumn>> {
    use GameLogColumn as C;
    vec![
        Column::new(C::Date, "Date", |g: &GameLogEntry| format_date(&g.game_date)),
        Column::new(C::Matchup, "Matchup", |g: &GameLogEntry| g.matchup.clone()),
        Column::new(C::Wl, "W/L", |g: &GameLogEntry| g.wl.clone()),
        Column::new(C::Min, "MIN", |g: &GameLogEntry| count(g.min)),
        Column::new(C::Pts, "PTS", |g: &GameLogEntry| count(g.pts)).with_thresholds(20.0, 5.0),
        Column::new(C::Reb, "REB", |g: &GameLogEntry| count(g.reb)).with_thresholds(8.0, 2.0),
        Column::new(C::Ast, "AST", |g: &GameLogEntry| count(g.ast)).with_thresholds(5.0, 0.0),
        Column::new(C::FgPct, "FG%", |g: &GameLogEntry| format_pct(g.fg_pct, 1))
            .with_thresholds(0.5, 0.35),
        Column::new(C::Fg3Pct, "3P%", |g: &GameLogEntry| format_pct(g.fg3_pct, 1))
            .with_thresholds(0.4, 0.25),
        Column::new(C::Stl, "STL", |g: &GameLogEntry| count(g.stl)),
        Column::new(C::Blk, "BLK", |g: &GameLogEntry| count(g.blk)),
        Column::new(C::Tov, "TOV", |g: &GameLogEntry| count(g.tov)),
        Column::new(C::PlusMinus, "+/-", |g: &GameLogEntry| format_plus_minus(g.plus_minus))
            .with_thresholds(5.0, -5.0),
    ]
}

/// Distinct opponents faced in `season`, sorted.
pub fn season_opponents(games: &[GameLogEntry], season: Season) -> Vec<String> {
    games
        .iter()
        .filter(|g| g.season == season.as_str())
        .map(|g| opponent(&g.matchup).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Regular-season games of `season` passing the optional filters.
pub fn filter_games(
    games: &[GameLogEntry],
    season: Season,
    opponent_filter: Option<&str>,
    wl: Option<WinLossFilter>,
) -> Vec<GameLogEntry> {
    games
        .iter()
        .filter(|g| g.season == season.as_str() && g.season_type == REGULAR_SEASON)
        .filter(|g| opponent_filter.map_or(true, |o| opponent(&g.matchup).eq_ignore_ascii_case(o)))
        .filter(|g| wl.map_or(true, |f| f.matches(&g.wl)))
        .cloned()
        .collect()
}

/// Filters and sort selections for one game log request.
#[derive(Debug, Clone, Default)]
pub struct GameLogQuery {
    pub opponent: Option<String>,
    pub wl: Option<WinLossFilter>,
    pub sort: Vec<GameLogColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameLogView {
    pub season: Season,
    pub opponent: Option<String>,
    pub wl: Option<String>,
    pub opponents: Vec<String>,
    pub games: TableSection<GameLogColumn>,
}

pub fn build_game_log_view(dataset: &Dataset, season: Season, query: &GameLogQuery) -> GameLogView {
    let games = filter_games(
        &dataset.game_log.games,
        season,
        query.opponent.as_deref(),
        query.wl,
    );
    let sort = sort_from_requests(
        Some(SortState::new(GameLogColumn::Date, SortDirection::Desc)),
        &query.sort,
    );
    debug!(%season, games = games.len(), ?sort, "game log");

    GameLogView {
        season,
        opponent: query.opponent.clone(),
        wl: query.wl.map(|f| f.to_string()),
        opponents: season_opponents(&dataset.game_log.games, season),
        games: TableSection::build(&columns(), &games, sort),
    }
}

pub fn render_game_log(view: &GameLogView) -> String {
    if view.opponents.is_empty() {
        return no_data_message("game log", view.season);
    }

    let mut out = String::new();
    out.push_str(&format!("Game log, {} ({} games)\n", view.season, view.games.rows));
    out.push_str(&format!("Opponents: {}\n\n", view.opponents.join(" ")));
    if view.games.rows == 0 {
        out.push_str("No games match the selected filters.\n");
    } else {
        out.push_str(&render_table(&view.games.table));
    }
    out
}

pub fn handle_game_log(ctx: &PageContext, query: &GameLogQuery) -> Result<()> {
    let view = build_game_log_view(&ctx.dataset, ctx.season, query);
    emit(&view, ctx.as_json, render_game_log)
}
