//! On/off impact page.

use serde::Serialize;
use tracing::debug;

use super::{card_line, emit, no_data_message, PageContext, StatCard};
use crate::{
    data::{Dataset, LineupPairStats},
    metrics::{
        format_pct, format_plus_minus,
        impact::{advanced_metric_specs, bar_series, base_metric_specs, evaluate_pair, radar_series},
        ChartPoint, Classification, ImpactSummary, MetricDelta, NO_DATA,
    },
    Result, Season,
};

#[derive(Debug, Clone, Serialize)]
pub struct ImpactView {
    pub season: Season,
    /// `None` unless both sides of the base pair are present.
    pub impact: Option<ImpactData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactData {
    /// `None` when the advanced pair is incomplete.
    pub summary: Option<ImpactSummary>,
    pub cards: Vec<MetricDelta>,
    pub advanced_cards: Vec<MetricDelta>,
    pub bar: Vec<ChartPoint>,
    pub radar: Vec<ChartPoint>,
    pub lineup_pair: Option<Vec<StatCard>>,
}

fn lineup_cards(pair: &LineupPairStats) -> Vec<StatCard> {
    vec![
        StatCard::new("Games", pair.gp.to_string()),
        StatCard::new("Record", format!("{}-{}", pair.w, pair.l)),
        StatCard::new("+/-", format_plus_minus(pair.plus_minus)),
        StatCard::new("FG%", format_pct(pair.fg_pct, 1)),
    ]
}

pub fn build_impact_view(dataset: &Dataset, season: Season) -> ImpactView {
    let season_data = dataset.on_off.on_off.get(season);
    let base = season_data.and_then(|s| s.base.as_ref());

    let impact = base
        .filter(|pair| pair.on.is_some() && pair.off.is_some())
        .map(|base| {
            let advanced = season_data.and_then(|s| s.advanced.as_ref());
            let (bar, radar) = match advanced.and_then(|a| a.on.as_ref().zip(a.off.as_ref())) {
                Some((on, off)) => (bar_series(on, off), radar_series(on, off)),
                None => (Vec::new(), Vec::new()),
            };

            ImpactData {
                summary: ImpactSummary::from_pair(advanced),
                cards: evaluate_pair(&base_metric_specs(), Some(base)),
                advanced_cards: evaluate_pair(&advanced_metric_specs(), advanced),
                bar,
                radar,
                lineup_pair: dataset.on_off.lineup_pairs.get(season).map(lineup_cards),
            }
        });

    debug!(%season, has_base = impact.is_some(), "impact");
    ImpactView { season, impact }
}

fn marker(classification: Classification) -> &'static str {
    match classification {
        Classification::Favorable => "▲",
        Classification::Unfavorable => "▼",
        Classification::Neutral => "·",
    }
}

fn push_cards(out: &mut String, cards: &[MetricDelta]) {
    for card in cards {
        out.push_str(&format!(
            "  {:<11} on {:>7}  off {:>7}  {} {}\n",
            card.label,
            card.on_display,
            card.off_display,
            marker(card.classification),
            card.delta_display
        ));
    }
}

fn push_series(out: &mut String, title: &str, points: &[ChartPoint]) {
    if points.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}\n", title));
    for p in points {
        let show = |v: Option<f64>| v.map_or_else(|| NO_DATA.to_string(), |v| format!("{:.1}", v));
        out.push_str(&format!("  {:<8} on {:>7}  off {:>7}\n", p.name, show(p.on), show(p.off)));
    }
}

pub fn render_impact(view: &ImpactView) -> String {
    let Some(data) = &view.impact else {
        return no_data_message("on/off", view.season);
    };

    let mut out = String::new();
    out.push_str(&format!("On/off impact, {}\n", view.season));
    match &data.summary {
        Some(s) => {
            out.push_str(&format!("{}\n{}\n", s.headline, s.detail));
        }
        None => {
            out.push_str(&format!("Impact summary: {}\n", NO_DATA));
        }
    }

    out.push('\n');
    push_cards(&mut out, &data.cards);
    if data.advanced_cards.iter().any(|c| !c.is_no_data()) {
        out.push('\n');
        push_cards(&mut out, &data.advanced_cards);
    }

    push_series(&mut out, "Team ratings", &data.bar);
    push_series(&mut out, "Radar", &data.radar);

    if let Some(cards) = &data.lineup_pair {
        out.push_str(&format!("\nLineup pair\n  {}\n", card_line(cards)));
    }
    out
}

pub fn handle_impact(ctx: &PageContext) -> Result<()> {
    let view = build_impact_view(&ctx.dataset, ctx.season);
    emit(&view, ctx.as_json, render_impact)
}
