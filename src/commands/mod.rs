//! Page handlers for the hoop-stats dashboard.
//!
//! Each page builds a serializable view from the loaded [`Dataset`] and
//! prints it either as text or as pretty JSON.

pub mod advanced;
pub mod career;
pub mod dashboard;
pub mod game_log;
pub mod impact;
pub mod shooting;
pub mod splits;
pub mod trends;


use serde::Serialize;
use tracing::info;

use crate::{
    cli::PageArgs,
    core::resolve_data_dir,
    data::Dataset,
    table::{sort_records, Column, SortDirection, SortField, SortState, TableView},
    Result, Season,
};

/// Loaded data plus the options shared by every page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub dataset: Dataset,
    pub season: Season,
    pub as_json: bool,
}

impl PageContext {
    /// Resolve the data directory and load every dataset.
    pub fn load(args: &PageArgs) -> Result<Self> {
        let dir = resolve_data_dir(args.data_dir.clone())?;
        info!(data_dir = %dir.display(), season = %args.season, "loading datasets");
        let dataset = Dataset::load(&dir)?;
        Ok(Self {
            dataset,
            season: args.season,
            as_json: args.json,
        })
    }
}

/// Print `view` as JSON, or through `text` otherwise.
pub fn emit<V: Serialize>(view: &V, as_json: bool, text: impl FnOnce(&V) -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", text(view));
    }
    Ok(())
}

pub fn no_data_message(what: &str, season: Season) -> String {
    format!("No {} data available for {}.\n", what, season)
}

/// Sort state after applying `requests` in order. Without a default, the
/// first request activates its column in descending order; without either,
/// the table keeps the dataset's order.
pub fn sort_from_requests<F: Copy + PartialEq>(
    default: Option<SortState<F>>,
    requests: &[F],
) -> Option<SortState<F>> {
    let mut requests = requests.iter().copied();
    let mut state =
        default.or_else(|| requests.next().map(|f| SortState::new(f, SortDirection::Desc)))?;
    state.apply_requests(requests);
    Some(state)
}

/// A table section of a page: its sort state and formatted rows.
#[derive(Debug, Clone, Serialize)]
pub struct TableSection<F> {
    pub sort: Option<SortState<F>>,
    pub rows: usize,
    pub table: TableView,
}

impl<F: Copy + PartialEq> TableSection<F> {
    pub fn build<T: Clone>(columns: &[Column<T, F>], records: &[T], sort: Option<SortState<F>>) -> Self
    where
        F: SortField<T>,
    {
        let ordered = match sort {
            Some(s) => sort_records(records, s.field, s.direction),
            None => records.to_vec(),
        };
        Self {
            sort,
            rows: ordered.len(),
            table: TableView::build(columns, &ordered, sort),
        }
    }
}

/// `"Label: value"` pairs laid out on one line.
pub(crate) fn card_line(cards: &[StatCard]) -> String {
    cards
        .iter()
        .map(|c| format!("{}: {}", c.label, c.value))
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// A single labelled figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}
