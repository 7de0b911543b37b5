//! Integration tests for page handlers and the table/metric/shot components

mod common;

use approx::assert_relative_eq;
use hoop_stats::{
    cli::{types::GameLogColumn, PageArgs},
    commands::{
        game_log::{build_game_log_view, GameLogQuery},
        impact::build_impact_view,
        shooting::build_shooting_view,
        PageContext,
    },
    metrics::{Classification, MetricSpec, NO_DATA},
    shots::{classify, ColorBucket},
    table::{sort_records, SortDirection, SortField, SortState, SortValue, SortableTable},
    Season,
};

fn context(season: Season) -> (tempfile::TempDir, PageContext) {
    let dir = common::data_dir();
    let args = PageArgs {
        season,
        data_dir: Some(dir.path().to_path_buf()),
        json: true,
        verbose: false,
    };
    let ctx = PageContext::load(&args).unwrap();
    (dir, ctx)
}

#[test]
fn test_impact_page_from_disk() {
    let (_dir, ctx) = context(Season::S2024_25);
    let view = build_impact_view(&ctx.dataset, ctx.season);
    let impact = view.impact.unwrap();

    let points = &impact.cards[0];
    assert_eq!(points.on_display, "15.2");
    assert_eq!(points.off_display, "10.8");
    assert_eq!(points.delta_display, "+4.4");
    assert_eq!(points.classification, Classification::Favorable);

    let summary = impact.summary.unwrap();
    assert_eq!(
        summary.headline,
        "Team scores 12.0 more points per 100 possessions with the player on court"
    );
    assert_eq!(
        summary.detail,
        "Team net rating: +10.0 on court vs -6.5 off court (swing of +16.5)"
    );

    // radar: 130 - DRtg, net + 20, eFG% x 100
    let radar = &impact.radar;
    assert_eq!(radar[1].on, Some(19.0));
    assert_eq!(radar[2].off, Some(13.5));
    assert_relative_eq!(radar[3].on.unwrap(), 60.0, epsilon = 1e-9);
    assert_eq!(radar[4].on, None);
}

#[test]
fn test_impact_json_marks_no_data() {
    let (_dir, ctx) = context(Season::S2023_24);
    let view = build_impact_view(&ctx.dataset, ctx.season);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["season"], "2023-24");
    assert!(json["impact"].is_null());
}

#[test]
fn test_game_log_json_shape() {
    let (_dir, ctx) = context(Season::S2024_25);
    let query = GameLogQuery {
        sort: vec![GameLogColumn::Pts],
        ..Default::default()
    };
    let view = build_game_log_view(&ctx.dataset, ctx.season, &query);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["games"]["sort"]["field"], "pts");
    assert_eq!(json["games"]["sort"]["direction"], "desc");
    assert_eq!(json["games"]["rows"], 3);
    assert_eq!(json["games"]["table"]["headers"][4], "PTS ▼");
    assert_eq!(json["games"]["table"]["rows"][0][4]["text"], "21");
    assert_eq!(json["games"]["table"]["rows"][0][4]["tone"], "good");
    assert_eq!(json["opponents"], serde_json::json!(["DAL", "LAL", "OKC"]));
}

#[test]
fn test_shooting_boundaries_from_disk() {
    let (_dir, ctx) = context(Season::S2024_25);
    let view = build_shooting_view(&ctx.dataset, ctx.season, true);
    let zones = view.splits.unwrap().zones;

    assert_eq!(zones.len(), 3);
    assert_eq!(zones[1].bucket, ColorBucket::From35To39);
    assert_eq!(zones[2].bucket, ColorBucket::AtLeast50);
    assert_eq!(zones[2].color, "#22c55e");

    let shots = view.shots.unwrap();
    assert_eq!(shots.made + shots.missed, shots.total);
    assert_eq!(shots.pct_display, "50.0");
    // x = 250 + (-225 * 0.8)
    assert_relative_eq!(shots.points[1].x, 70.0, epsilon = 1e-9);
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    value: Option<f64>,
    name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RowField {
    Value,
    Name,
}

impl SortField<Row> for RowField {
    fn value<'a>(&self, r: &'a Row) -> SortValue<'a> {
        match self {
            RowField::Value => r.value.into(),
            RowField::Name => SortValue::Text(r.name),
        }
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 1, value: Some(3.0), name: "c" },
        Row { id: 2, value: None, name: "a" },
        Row { id: 3, value: Some(1.0), name: "b" },
        Row { id: 4, value: Some(3.0), name: "d" },
        Row { id: 5, value: None, name: "e" },
    ]
}

fn ids(rows: &[Row]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn test_sort_is_stable_permutation_with_nulls_last() {
    let input = rows();
    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let sorted = sort_records(&input, RowField::Value, direction);
        assert_eq!(sorted.len(), input.len());
        let mut a = ids(&sorted);
        a.sort();
        assert_eq!(a, vec![1, 2, 3, 4, 5]);
        assert_eq!(&ids(&sorted)[3..], &[2, 5]);
    }
    assert_eq!(ids(&sort_records(&input, RowField::Value, SortDirection::Asc)), vec![3, 1, 4, 2, 5]);
    assert_eq!(ids(&sort_records(&input, RowField::Value, SortDirection::Desc)), vec![1, 4, 3, 2, 5]);
    assert_eq!(ids(&input), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_is_idempotent() {
    let once = sort_records(&rows(), RowField::Name, SortDirection::Desc);
    let twice = sort_records(&once, RowField::Name, SortDirection::Desc);
    assert_eq!(once, twice);
}

#[test]
fn test_toggle_round_trip() {
    let mut table = SortableTable::new(rows(), RowField::Value, SortDirection::Desc);
    table.request_sort(RowField::Value);
    table.request_sort(RowField::Value);
    assert_eq!(table.state(), SortState::new(RowField::Value, SortDirection::Desc));

    table.request_sort(RowField::Name);
    assert_eq!(table.state().direction, SortDirection::Desc);
    assert_eq!(ids(&table.sorted()), vec![5, 4, 1, 3, 2]);
}

#[derive(Debug)]
struct Pair {
    pts: Option<f64>,
}

#[test]
fn test_delta_absence_is_never_classified() {
    let spec = MetricSpec::raw("Points", |p: &Pair| p.pts);
    let present = Pair { pts: Some(10.0) };
    let absent = Pair { pts: None };

    for (on, off) in [
        (Some(&present), None),
        (None, Some(&present)),
        (Some(&present), Some(&absent)),
    ] {
        let d = spec.evaluate(on, off);
        assert_eq!(d.classification, Classification::Neutral);
        assert_eq!(d.delta_display, NO_DATA);
    }
}

#[test]
fn test_classify_examples() {
    assert_eq!(classify(Some(0.35)), ColorBucket::From35To39);
    assert_eq!(classify(Some(0.50)), ColorBucket::AtLeast50);
    assert_eq!(classify(Some(0.452)), ColorBucket::From45To49);
    assert_eq!(classify(Some(0.0)), ColorBucket::NoData);
    assert_eq!(classify(None), ColorBucket::NoData);
}
