//! Chart-data aggregation engine
//!
//! Reduces a heterogeneous list of historical activity records into the five
//! chart-ready shapes consumed by the dashboard and the PDF export. Every
//! function here is total: malformed records lose the unusable field but
//! never abort the batch, and the empty list yields the empty/zeroed shape.

pub mod charts;
pub mod dates;
pub mod numeric;
