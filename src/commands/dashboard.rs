//! Dashboard page: player bio and season averages.

use serde::Serialize;
use tracing::debug;

use super::{card_line, emit, no_data_message, PageContext, StatCard};
use crate::{
    data::{Dataset, PlayerInfo, SplitRow},
    metrics::{format_number, format_pct, format_plus_minus},
    Result, Season,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerBio {
    pub name: String,
    /// `#15 · C · Denver Nuggets`
    pub role: String,
    /// `6-11 · 284 lbs`
    pub physical: String,
    pub school: String,
    /// `2014 Draft: Rd 2, Pick 41`
    pub draft: String,
}

impl From<&PlayerInfo> for PlayerBio {
    fn from(info: &PlayerInfo) -> Self {
        Self {
            name: info.display_first_last.clone(),
            role: format!(
                "#{} · {} · {} {}",
                info.jersey, info.position, info.team_city, info.team_name
            ),
            physical: format!("{} · {} lbs", info.height, info.weight),
            school: info.school.clone(),
            draft: format!(
                "{} Draft: Rd {}, Pick {}",
                info.draft_year, info.draft_round, info.draft_number
            ),
        }
    }
}

/// Season cards from the `overall` split row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonCards {
    pub headline: Vec<StatCard>,
    pub detail: Vec<StatCard>,
}

impl From<&SplitRow> for SeasonCards {
    fn from(row: &SplitRow) -> Self {
        Self {
            headline: vec![
                StatCard::new("PPG", format_number(Some(row.pts), 1)),
                StatCard::new("RPG", format_number(Some(row.reb), 1)),
                StatCard::new("APG", format_number(Some(row.ast), 1)),
                StatCard::new("FG%", format_pct(row.fg_pct, 1)),
                StatCard::new("3P%", format_pct(row.fg3_pct, 1)),
                StatCard::new("+/-", format_plus_minus(row.plus_minus)),
            ],
            detail: vec![
                StatCard::new("Games", row.gp.to_string()),
                StatCard::new("Record", format!("{}-{}", row.w, row.l)),
                StatCard::new("MPG", format_number(Some(row.min), 1)),
                StatCard::new("FT%", format_pct(row.ft_pct, 1)),
                StatCard::new("SPG", format_number(Some(row.stl), 1)),
                StatCard::new("BPG", format_number(Some(row.blk), 1)),
                StatCard::new("TOV", format_number(Some(row.tov), 1)),
                StatCard::new(
                    "FGM-FGA",
                    format!(
                        "{}-{}",
                        format_number(Some(row.fgm), 1),
                        format_number(Some(row.fga), 1)
                    ),
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub season: Season,
    pub bio: PlayerBio,
    /// `None` when the season has no overall split.
    pub cards: Option<SeasonCards>,
}

pub fn build_dashboard_view(dataset: &Dataset, season: Season) -> DashboardView {
    let overall = dataset
        .general_splits
        .get(season)
        .and_then(|s| s.overall.first());
    debug!(%season, has_overall = overall.is_some(), "dashboard");

    DashboardView {
        season,
        bio: PlayerBio::from(&dataset.overview.info),
        cards: overall.map(SeasonCards::from),
    }
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let bio = &view.bio;
    out.push_str(&format!("{}\n", bio.name));
    out.push_str(&format!("{}\n", bio.role));
    out.push_str(&format!("{} · {} · {}\n", bio.physical, bio.school, bio.draft));
    out.push('\n');

    match &view.cards {
        Some(cards) => {
            out.push_str(&format!("{} season\n", view.season));
            out.push_str(&format!("{}\n", card_line(&cards.headline)));
            out.push_str(&format!("{}\n", card_line(&cards.detail)));
        }
        None => out.push_str(&no_data_message("season", view.season)),
    }
    out
}

pub fn handle_dashboard(ctx: &PageContext) -> Result<()> {
    let view = build_dashboard_view(&ctx.dataset, ctx.season);
    emit(&view, ctx.as_json, render_dashboard)
}
