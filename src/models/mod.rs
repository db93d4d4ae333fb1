//! Data models for the AgroGestor core engine

pub mod activity;
pub mod charts;
pub mod irrigation;
pub mod productivity;

pub use activity::*;
pub use charts::*;
pub use irrigation::*;
pub use productivity::*;
