//! Shared fixture: a temporary data directory holding all seven datasets.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const GENERATED_AT: &str = "2026-02-22T12:00:00Z";

fn envelope(data: Value) -> String {
    serde_json::to_string_pretty(&json!({
        "meta": { "generated_at": GENERATED_AT, "season": null },
        "data": data
    }))
    .unwrap()
}

fn game(season: &str, date: &str, matchup: &str, wl: &str, pts: f64) -> Value {
    json!({
        "SEASON": season, "SEASON_TYPE": "Regular Season", "Game_ID": format!("g-{}", date),
        "GAME_DATE": date, "MATCHUP": matchup, "WL": wl,
        "MIN": 30.0, "FGM": 6.0, "FGA": 11.0, "FG_PCT": 0.545,
        "FG3M": 2.0, "FG3A": 5.0, "FG3_PCT": 0.4,
        "FTM": 1.0, "FTA": 2.0, "FT_PCT": 0.5,
        "OREB": 1.0, "DREB": 4.0, "REB": 5.0, "AST": 3.0,
        "STL": 1.0, "BLK": 1.0, "TOV": 2.0, "PF": 3.0,
        "PTS": pts, "PLUS_MINUS": 6.0
    })
}

fn split(value: &str, pts: f64) -> Value {
    json!({
        "GROUP_VALUE": value, "GP": 41, "W": 27, "L": 14, "MIN": 33.0,
        "FGM": 6.0, "FGA": 10.5, "FG_PCT": 0.58, "FG3_PCT": 0.39, "FT_PCT": 0.77,
        "REB": 5.2, "AST": 2.5, "TOV": 1.2, "STL": 1.1, "BLK": 0.5,
        "PTS": pts, "PLUS_MINUS": 5.5
    })
}

pub fn datasets() -> Vec<(&'static str, String)> {
    vec![
        (
            "player_overview.json",
            envelope(json!({
                "info": {
                    "DISPLAY_FIRST_LAST": "Christian Braun", "JERSEY": "0", "POSITION": "Guard",
                    "TEAM_CITY": "Denver", "TEAM_NAME": "Nuggets"
                },
                "headline": { "PTS": 15.4, "AST": 2.5, "REB": 5.2, "PIE": 0.1 }
            })),
        ),
        (
            "game_log.json",
            envelope(json!({ "games": [
                game("2024-25", "2024-10-24", "DEN vs. OKC", "L", 8.0),
                game("2024-25", "2024-11-12", "DEN @ DAL", "W", 21.0),
                game("2024-25", "2024-11-30", "DEN vs. LAL", "W", 13.0),
                game("2023-24", "2024-01-05", "DEN @ BOS", "L", 6.0)
            ]})),
        ),
        (
            "on_off_jokic.json",
            envelope(json!({
                "on_off": {
                    "2024-25": {
                        "base": {
                            "jokic_on": { "GP": 60, "MIN": 28.0, "PTS": 15.2, "REB": 5.5, "AST": 2.8,
                                          "FG_PCT": 0.58, "FG3_PCT": 0.41, "PLUS_MINUS": 7.0 },
                            "jokic_off": { "GP": 60, "MIN": 8.0, "PTS": 10.8, "REB": 4.9, "AST": 2.0,
                                           "FG_PCT": 0.51, "FG3_PCT": 0.37, "PLUS_MINUS": -3.0 }
                        },
                        "advanced": {
                            "jokic_on": { "GP": 60, "MIN": 28.0, "OFF_RATING": 121.0, "DEF_RATING": 111.0,
                                          "NET_RATING": 10.0, "EFG_PCT": 0.6 },
                            "jokic_off": { "GP": 60, "MIN": 8.0, "OFF_RATING": 109.0, "DEF_RATING": 115.5,
                                           "NET_RATING": -6.5, "EFG_PCT": 0.52 }
                        }
                    },
                    "2023-24": null
                },
                "lineup_pairs": {}
            })),
        ),
        (
            "general_splits.json",
            envelope(json!({
                "2024-25": {
                    "overall": [split("2024-25", 15.4)],
                    "location": [split("Home", 16.0), split("Road", 14.8)],
                    "month": [split("October", 11.0), split("November", 15.9)]
                }
            })),
        ),
        (
            "shooting_splits.json",
            envelope(json!({
                "2024-25": {
                    "shot_area": [
                        { "GROUP_VALUE": "Restricted Area", "FGM": 3.0, "FGA": 4.2, "FG_PCT": 0.714 },
                        { "GROUP_VALUE": "Left Corner 3", "FGM": 0.35, "FGA": 1.0, "FG_PCT": 0.35 },
                        { "GROUP_VALUE": "Above the Break 3", "FGM": 0.5, "FGA": 1.0, "FG_PCT": 0.5 }
                    ],
                    "shot_type": [],
                    "distance": [],
                    "assisted": []
                }
            })),
        ),
        (
            "career.json",
            envelope(json!({
                "base": [
                    { "GROUP_VALUE": "2023-24", "GP": 82, "MIN": 20.2, "FG_PCT": 0.5, "FG3_PCT": 0.38,
                      "FT_PCT": 0.6, "REB": 3.8, "AST": 1.3, "STL": 0.6, "BLK": 0.3, "PTS": 7.3, "PLUS_MINUS": 1.0 },
                    { "GROUP_VALUE": "2024-25", "GP": 79, "MIN": 33.8, "FG_PCT": 0.58, "FG3_PCT": 0.4,
                      "FT_PCT": 0.77, "REB": 5.2, "AST": 2.5, "STL": 1.1, "BLK": 0.5, "PTS": 15.4, "PLUS_MINUS": 5.5 }
                ],
                "advanced": []
            })),
        ),
        (
            "shot_chart.json",
            envelope(json!({ "shots": [
                { "SEASON": "2024-25", "GAME_DATE": "20241024", "LOC_X": 0, "LOC_Y": 5,
                  "SHOT_MADE_FLAG": 1, "SHOT_TYPE": "2PT Field Goal", "SHOT_ZONE_BASIC": "Restricted Area",
                  "SHOT_DISTANCE": 0, "ACTION_TYPE": "Layup Shot" },
                { "SEASON": "2024-25", "GAME_DATE": "20241024", "LOC_X": -225, "LOC_Y": 10,
                  "SHOT_MADE_FLAG": 0, "SHOT_TYPE": "3PT Field Goal", "SHOT_ZONE_BASIC": "Left Corner 3",
                  "SHOT_DISTANCE": 23, "ACTION_TYPE": "Jump Shot" }
            ]})),
        ),
    ]
}

/// Write every dataset into a fresh temporary directory.
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(dir.path());
    dir
}

pub fn write_datasets(dir: &Path) {
    for (file, contents) in datasets() {
        fs::write(dir.join(file), contents).unwrap();
    }
}
