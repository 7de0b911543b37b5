//! Sortable projections of season/game records.
//!
//! Every tabular page (game log, splits, career, advanced) shows the same
//! kind of view: a list of uniform records, one active sort field, and a
//! direction that toggles when the active field is selected again.
//!
//! - `SortField` maps a typed field key to the value compared for one record
//! - `sort_records` produces a new, stably ordered sequence (nulls last)
//! - `SortState` is the per-table selection state machine
//! - `columns` and `render` turn a sorted sequence into a displayable table

pub mod columns;
pub mod render;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

pub use columns::{Cell, Column, Thresholds, TableView, Tone};
pub use render::render_table;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header marker shown next to the active column.
    pub fn marker(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}

/// The value a record exposes for one sortable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    Null,
}

impl SortValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, SortValue::Null)
    }

    /// Numeric view of the value, used for threshold tones.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // Mixed kinds never occur within one record shape; keep numbers first.
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl From<f64> for SortValue<'_> {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

impl From<Option<f64>> for SortValue<'_> {
    fn from(n: Option<f64>) -> Self {
        n.map_or(SortValue::Null, SortValue::Number)
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(s: &'a str) -> Self {
        SortValue::Text(s)
    }
}

/// A typed field key for records of type `T`.
///
/// Each table defines a small enum of its sortable columns and implements
/// this trait to read the matching field from a record. Only keys that exist
/// on `T` can be expressed, so an invalid field name is a compile error.
pub trait SortField<T>: Copy + PartialEq {
    fn value<'a>(&self, record: &'a T) -> SortValue<'a>;
}

/// Compare two records on `field`. Nulls sort after non-null values in both
/// directions; two nulls compare equal.
pub fn compare_records<T, F: SortField<T>>(
    a: &T,
    b: &T,
    field: F,
    direction: SortDirection,
) -> Ordering {
    let (va, vb) = (field.value(a), field.value(b));
    match (va.is_null(), vb.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => va.natural_cmp(&vb),
            SortDirection::Desc => vb.natural_cmp(&va),
        },
    }
}

/// Sort `records` by `field` into a new vector. The input is left untouched
/// and equal records keep their input order.
pub fn sort_records<T: Clone, F: SortField<T>>(
    records: &[T],
    field: F,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_records(a, b, field, direction));
    sorted
}

/// Active sort field and direction for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Select `field`: the active field flips direction, any other field
    /// becomes active in descending order.
    pub fn request_sort(&mut self, field: F) {
        if field == self.field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }

    /// Apply a sequence of selection events in order.
    pub fn apply_requests<I: IntoIterator<Item = F>>(&mut self, requests: I) {
        for field in requests {
            self.request_sort(field);
        }
    }
}

/// A table instance: its records plus the sort state it owns.
#[derive(Debug, Clone)]
pub struct SortableTable<T, F> {
    records: Vec<T>,
    state: SortState<F>,
}

impl<T: Clone, F: SortField<T>> SortableTable<T, F> {
    pub fn new(records: Vec<T>, default_field: F, default_direction: SortDirection) -> Self {
        Self {
            records,
            state: SortState::new(default_field, default_direction),
        }
    }

    pub fn request_sort(&mut self, field: F) {
        self.state.request_sort(field);
    }

    pub fn state(&self) -> SortState<F> {
        self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by the current state.
    pub fn sorted(&self) -> Vec<T> {
        sort_records(&self.records, self.state.field, self.state.direction)
    }
}
