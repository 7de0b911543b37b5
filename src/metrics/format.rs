//! Display formatting for box-score values.
//!
//! Percentages arrive as fractions (0-1) and are shown in percentage points
//! with one decimal place. Absent values render as [`PLACEHOLDER`], never as
//! a zero.

use chrono::NaiveDate;

/// Shown in place of an absent value.
pub const PLACEHOLDER: &str = "—";

/// `0.452` → `"45.2%"`.
pub fn format_pct(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}%", decimals, v * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => PLACEHOLDER.to_string(),
    }
}

/// `5.0` → `"+5.0"`, `-2.5` → `"-2.5"`, `0.0` → `"0.0"`.
pub fn format_plus_minus(value: Option<f64>) -> String {
    match value {
        Some(v) => format_signed(v, 1, ""),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fixed-decimal rendering with a `+` prefix on positive values.
pub fn format_signed(value: f64, decimals: usize, suffix: &str) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.*}{}", sign, decimals, value, suffix)
}

/// Fraction to percentage points rounded to one decimal, for chart series.
pub fn pct_points(value: f64) -> f64 {
    round1(value * 100.0)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse the date formats found in the bundled datasets.
pub fn parse_game_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    ["%Y-%m-%d", "%Y%m%d", "%b %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
        .or_else(|| {
            // ISO timestamps carry a time part after the date
            date.get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        })
}

/// `"2024-10-22"` → `"Oct 22, 2024"`. Unrecognised input is returned as-is.
pub fn format_date(date: &str) -> String {
    parse_game_date(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Opponent abbreviation: the last token of a matchup such as `"DEN @ LAL"`.
pub fn opponent(matchup: &str) -> &str {
    matchup.split_whitespace().last().unwrap_or("")
}

pub fn is_home_game(matchup: &str) -> bool {
    matchup.contains("vs.")
}
