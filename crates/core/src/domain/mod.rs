//! Domain model for the bookkeeping data the reports read.

pub mod period;
pub mod types;

pub use period::{ForecastWindow, YearMonth};
pub use types::*;
