//! Column definitions and the display view built from sorted records.

use super::{SortField, SortState};
use serde::Serialize;

/// Good/bad cut-offs for conditional cell coloring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub good: f64,
    pub bad: f64,
}

impl Thresholds {
    pub const fn new(good: f64, bad: f64) -> Self {
        Self { good, bad }
    }

    /// `good` wins ties when the two cut-offs overlap.
    pub fn tone(&self, value: f64) -> Tone {
        if value >= self.good {
            Tone::Good
        } else if value <= self.bad {
            Tone::Bad
        } else {
            Tone::Plain
        }
    }
}

/// Conditional color of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Bad,
    Plain,
}

/// One column of a sortable table.
pub struct Column<T, F> {
    pub field: F,
    pub label: &'static str,
    pub format: fn(&T) -> String,
    pub thresholds: Option<Thresholds>,
}

impl<T, F: SortField<T>> Column<T, F> {
    pub fn new(field: F, label: &'static str, format: fn(&T) -> String) -> Self {
        Self {
            field,
            label,
            format,
            thresholds: None,
        }
    }

    pub fn with_thresholds(mut self, good: f64, bad: f64) -> Self {
        self.thresholds = Some(Thresholds::new(good, bad));
        self
    }

    pub fn cell(&self, record: &T) -> Cell {
        let tone = match (self.thresholds, self.field.value(record).as_f64()) {
            (Some(t), Some(v)) => t.tone(v),
            _ => Tone::Plain,
        };
        Cell {
            text: (self.format)(record),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

/// A fully formatted table ready for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    /// Build the view for already-sorted `records`. The active column's
    /// header carries the direction marker.
    pub fn build<T, F: SortField<T>>(
        columns: &[Column<T, F>],
        records: &[T],
        state: Option<SortState<F>>,
    ) -> Self {
        let headers = columns
            .iter()
            .map(|col| match state {
                Some(s) if s.field == col.field => {
                    format!("{} {}", col.label, s.direction.marker())
                }
                _ => col.label.to_string(),
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| columns.iter().map(|col| col.cell(record)).collect())
            .collect();

        Self { headers, rows }
    }
}
