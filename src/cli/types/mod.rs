//! Type-safe wrappers and enums for the dashboard's CLI surface.

pub mod columns;
pub mod filters;
pub mod season;

pub use columns::{AdvancedColumn, CareerColumn, GameLogColumn, SplitColumn};
pub use filters::WinLossFilter;
pub use season::Season;
