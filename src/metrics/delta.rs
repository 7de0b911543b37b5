//! Paired-aggregate deltas (on court vs off court, before vs after).

use super::format::{format_signed, PLACEHOLDER};
use serde::Serialize;

/// Shown instead of a delta when either side of the pair is absent.
pub const NO_DATA: &str = "No data";

/// Which sign of a delta counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Favorable,
    Unfavorable,
    Neutral,
}

/// Deltas this close to zero are treated as zero.
const ZERO_TOLERANCE: f64 = 1e-9;

pub fn classify_delta(delta: f64, directionality: Directionality) -> Classification {
    if delta.abs() < ZERO_TOLERANCE {
        return Classification::Neutral;
    }
    match (directionality, delta > 0.0) {
        (Directionality::HigherIsBetter, true) | (Directionality::LowerIsBetter, false) => {
            Classification::Favorable
        }
        _ => Classification::Unfavorable,
    }
}

/// Reads one metric from an aggregate record.
pub enum Selector<T> {
    /// The field as stored.
    Raw(fn(&T) -> Option<f64>),
    /// A fractional field converted to percentage points before subtracting.
    PercentagePoints(fn(&T) -> Option<f64>),
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Selector<T> {}

impl<T> Selector<T> {
    pub fn select(&self, record: &T) -> Option<f64> {
        match self {
            Selector::Raw(f) => f(record),
            Selector::PercentagePoints(f) => f(record).map(|v| v * 100.0),
        }
    }
}

/// How selected values and their delta are displayed. Values reaching the
/// formatter are already in the selector's space (percentage points for
/// [`Selector::PercentagePoints`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `15.2`
    Decimal,
    /// `45.2%`
    Percent,
    /// `+5.2`; the on/off values carry a sign as well.
    PlusMinus,
}

impl ValueFormat {
    pub fn value(&self, v: f64) -> String {
        match self {
            ValueFormat::Decimal => format!("{:.1}", v),
            ValueFormat::Percent => format!("{:.1}%", v),
            ValueFormat::PlusMinus => format_signed(v, 1, ""),
        }
    }

    pub fn delta(&self, d: f64) -> String {
        match self {
            ValueFormat::Percent => format_signed(d, 1, "%"),
            ValueFormat::Decimal | ValueFormat::PlusMinus => format_signed(d, 1, ""),
        }
    }
}

/// Result of comparing one metric across a paired aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub label: String,
    pub on_display: String,
    pub off_display: String,
    /// `on - off`; `None` when either side is absent.
    pub delta: Option<f64>,
    pub delta_display: String,
    pub classification: Classification,
}

impl MetricDelta {
    pub fn is_no_data(&self) -> bool {
        self.delta.is_none()
    }
}

/// Compare `selector` across `on` and `off`.
///
/// An absent record, or a field absent on either side, short-circuits to a
/// no-data result with a neutral classification; nothing is coerced to zero.
pub fn delta<T>(
    label: &str,
    on: Option<&T>,
    off: Option<&T>,
    selector: Selector<T>,
    directionality: Directionality,
    format: ValueFormat,
) -> MetricDelta {
    let on_value = on.and_then(|r| selector.select(r));
    let off_value = off.and_then(|r| selector.select(r));
    let display = |v: Option<f64>| v.map_or_else(|| PLACEHOLDER.to_string(), |v| format.value(v));

    let (delta, delta_display, classification) = match (on_value, off_value) {
        (Some(a), Some(b)) => {
            let d = a - b;
            (Some(d), format.delta(d), classify_delta(d, directionality))
        }
        _ => (None, NO_DATA.to_string(), Classification::Neutral),
    };

    MetricDelta {
        label: label.to_string(),
        on_display: display(on_value),
        off_display: display(off_value),
        delta,
        delta_display,
        classification,
    }
}

/// A named metric definition, evaluated against many pairs.
pub struct MetricSpec<T> {
    pub label: &'static str,
    pub selector: Selector<T>,
    pub directionality: Directionality,
    pub format: ValueFormat,
}

impl<T> MetricSpec<T> {
    pub fn raw(label: &'static str, field: fn(&T) -> Option<f64>) -> Self {
        Self {
            label,
            selector: Selector::Raw(field),
            directionality: Directionality::HigherIsBetter,
            format: ValueFormat::Decimal,
        }
    }

    pub fn percentage(label: &'static str, field: fn(&T) -> Option<f64>) -> Self {
        Self {
            label,
            selector: Selector::PercentagePoints(field),
            directionality: Directionality::HigherIsBetter,
            format: ValueFormat::Percent,
        }
    }

    pub fn lower_is_better(mut self) -> Self {
        self.directionality = Directionality::LowerIsBetter;
        self
    }

    pub fn formatted(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn evaluate(&self, on: Option<&T>, off: Option<&T>) -> MetricDelta {
        delta(
            self.label,
            on,
            off,
            self.selector,
            self.directionality,
            self.format,
        )
    }
}
