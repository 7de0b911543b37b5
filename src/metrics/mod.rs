//! Derived metrics computed from raw box-score aggregates.
//!
//! - `delta`: signed on/off differences with favorable/unfavorable
//!   classification driven by a single [`Directionality`]
//! - `format`: display strings for counts, percentages, signed values, dates
//! - `impact`: the on/off page's metric set, headline summary and chart series

pub mod delta;
pub mod format;
pub mod impact;


pub use delta::{
    classify_delta, delta, Classification, Directionality, MetricDelta, MetricSpec, Selector,
    ValueFormat, NO_DATA,
};
pub use format::{
    format_date, format_number, format_pct, format_plus_minus, format_signed, is_home_game,
    opponent, parse_game_date, pct_points, round1, PLACEHOLDER,
};
pub use impact::{ChartPoint, ImpactSummary};
