//! Financial report generation.
//!
//! This module provides pure business logic for the built-in reports:
//! - Cash Flow by Month
//! - Payables by Supplier
//! - Status Breakdown
//! - Top Clients by Revenue
//! - Revenue vs Expense
//! - Cash Forecast

pub mod error;
pub mod service;
pub mod types;
pub mod view;


pub use error::ReportError;
pub use service::{FORECAST_HORIZON_DAYS, ReportService, TOP_CLIENTS_LIMIT};
pub use types::*;
pub use view::{ChartSeries, ReportView, SeriesData, TableView, report_menu};
