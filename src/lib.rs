//! Core domain engine for the AgroGestor farm management platform
//!
//! This crate contains the agronomic calculators (irrigation water demand,
//! productivity/cost/profitability) and the chart-data aggregation pass over
//! historical activity records. It is pure computation: no I/O, no shared
//! state, no persistence. Storage, routing and the presentation layer live in
//! the hosting application.

pub mod aggregation;
pub mod calc;
pub mod error;
pub mod models;

pub use error::{AppError, AppResult};
pub use models::*;

pub use aggregation::charts::{
    aggregate_activity_distribution, aggregate_cost_by_category, aggregate_crop_comparison,
    aggregate_monthly_productivity, general_stats,
};
pub use aggregation::dates::resolve_main_date;
pub use aggregation::numeric::{parse_amount, parse_locale_number};
pub use calc::irrigation::{calculate_irrigation, crop_guidance};
pub use calc::productivity::calculate_productivity;
