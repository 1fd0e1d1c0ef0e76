//! Report data types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::domain::{
    Client, ForecastWindow, LedgerEntry, Payable, Receivable, SettlementStatus, YearMonth,
};

/// Identifies one of the built-in reports.
///
/// A closed set: adding a report means adding a variant here, and the
/// compiler forces every dispatch site (selection, titles, generation)
/// to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Inflow and outflow totals per calendar month.
    CashFlowByMonth,
    /// Payables totaled per supplier, largest first.
    PayablesBySupplier,
    /// Payable and receivable counts per settlement status.
    StatusBreakdown,
    /// The clients with the highest received revenue.
    TopClients,
    /// Revenue versus expense for one calendar month.
    RevenueVsExpense,
    /// Pending cash movements over the next thirty days.
    CashForecast,
}

impl ReportKind {
    /// Every report, in menu order.
    pub const ALL: [Self; 6] = [
        Self::CashFlowByMonth,
        Self::PayablesBySupplier,
        Self::StatusBreakdown,
        Self::TopClients,
        Self::RevenueVsExpense,
        Self::CashForecast,
    ];

    /// Stable selector used in URLs and the report menu.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::CashFlowByMonth => "cash-flow-by-month",
            Self::PayablesBySupplier => "payables-by-supplier",
            Self::StatusBreakdown => "status-breakdown",
            Self::TopClients => "top-clients",
            Self::RevenueVsExpense => "revenue-vs-expense",
            Self::CashForecast => "cash-forecast",
        }
    }

    /// Human-readable report title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CashFlowByMonth => "Cash Flow by Month",
            Self::PayablesBySupplier => "Payables by Supplier",
            Self::StatusBreakdown => "Status Breakdown",
            Self::TopClients => "Top Clients by Revenue",
            Self::RevenueVsExpense => "Revenue vs Expense",
            Self::CashForecast => "Cash Forecast",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| ReportError::UnknownReport(s.to_string()))
    }
}

/// Everything the report engine reads, loaded up front.
///
/// The whole working set fits comfortably in memory (this is bookkeeping
/// data, not event volume), so reports run over plain collections instead
/// of pushing aggregation into the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    /// Client roster, joined against receivables by id.
    pub clients: Vec<Client>,
    /// All payables.
    pub payables: Vec<Payable>,
    /// All receivables.
    pub receivables: Vec<Receivable>,
    /// All ledger entries.
    pub ledger_entries: Vec<LedgerEntry>,
}

/// One month's inflow and outflow totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    /// The month being totaled.
    pub month: YearMonth,
    /// Sum of inflow amounts in the month.
    pub inflow: Decimal,
    /// Sum of outflow amounts in the month.
    pub outflow: Decimal,
}

impl MonthlyFlow {
    /// Net movement for the month (inflow minus outflow).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.inflow - self.outflow
    }
}

/// Cash flow grouped by calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowByMonthReport {
    /// One row per month with at least one entry, ascending by month.
    pub rows: Vec<MonthlyFlow>,
    /// Sum of every inflow across all months.
    pub total_inflow: Decimal,
    /// Sum of every outflow across all months.
    pub total_outflow: Decimal,
}

/// One supplier's total payable amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierTotal {
    /// Supplier name.
    pub supplier: String,
    /// Sum of this supplier's payable amounts.
    pub total: Decimal,
}

/// Payables totaled per supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayablesBySupplierReport {
    /// One row per supplier, descending by total.
    pub suppliers: Vec<SupplierTotal>,
    /// Sum of all payable amounts.
    pub grand_total: Decimal,
}

/// Payable and receivable counts for one settlement status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status being counted.
    pub status: SettlementStatus,
    /// Number of payables with this status.
    pub payables: u64,
    /// Number of receivables with this status.
    pub receivables: u64,
}

/// Row counts per settlement status across both collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdownReport {
    /// One row per status present in either collection, in enum order.
    pub rows: Vec<StatusCount>,
}

/// One client's received revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRevenue {
    /// Client name.
    pub client: String,
    /// Sum of received amounts for this client.
    pub total: Decimal,
}

/// The highest-revenue clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopClientsReport {
    /// At most [`TOP_CLIENTS_LIMIT`] rows, descending by total.
    ///
    /// [`TOP_CLIENTS_LIMIT`]: super::service::TOP_CLIENTS_LIMIT
    pub clients: Vec<ClientRevenue>,
}

/// Revenue and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueVsExpenseReport {
    /// The month covered.
    pub month: YearMonth,
    /// Sum of inflow amounts in the month.
    pub revenue: Decimal,
    /// Sum of outflow amounts in the month.
    pub expense: Decimal,
    /// Revenue minus expense.
    pub net: Decimal,
}

/// Pending cash movements over the forecast window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashForecastReport {
    /// The inclusive window the forecast covers.
    pub window: ForecastWindow,
    /// Sum of pending receivable amounts due in the window.
    pub total_receivable: Decimal,
    /// Sum of pending payable amounts due in the window.
    pub total_payable: Decimal,
    /// Expected net position: receivable minus payable.
    pub net: Decimal,
    /// The receivable rows behind the totals, in input order.
    pub receivables: Vec<Receivable>,
    /// The payable rows behind the totals, in input order.
    pub payables: Vec<Payable>,
}

/// A generated report, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report", rename_all = "kebab-case")]
pub enum Report {
    /// See [`CashFlowByMonthReport`].
    CashFlowByMonth(CashFlowByMonthReport),
    /// See [`PayablesBySupplierReport`].
    PayablesBySupplier(PayablesBySupplierReport),
    /// See [`StatusBreakdownReport`].
    StatusBreakdown(StatusBreakdownReport),
    /// See [`TopClientsReport`].
    TopClients(TopClientsReport),
    /// See [`RevenueVsExpenseReport`].
    RevenueVsExpense(RevenueVsExpenseReport),
    /// See [`CashForecastReport`].
    CashForecast(CashForecastReport),
}

impl Report {
    /// Returns which report this is.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::CashFlowByMonth(_) => ReportKind::CashFlowByMonth,
            Self::PayablesBySupplier(_) => ReportKind::PayablesBySupplier,
            Self::StatusBreakdown(_) => ReportKind::StatusBreakdown,
            Self::TopClients(_) => ReportKind::TopClients,
            Self::RevenueVsExpense(_) => ReportKind::RevenueVsExpense,
            Self::CashForecast(_) => ReportKind::CashForecast,
        }
    }
}
