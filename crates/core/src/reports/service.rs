//! Report generation service.
//!
//! Each report is a pure function over domain collections. The functions
//! never fail: empty input produces a report with empty rows and zero
//! totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    CashFlowByMonthReport, CashForecastReport, ClientRevenue, FinanceSnapshot, MonthlyFlow,
    PayablesBySupplierReport, Report, ReportKind, RevenueVsExpenseReport, StatusBreakdownReport,
    StatusCount, SupplierTotal, TopClientsReport,
};
use crate::domain::{
    Client, EntryKind, ForecastWindow, LedgerEntry, Payable, Receivable, SettlementStatus,
    YearMonth,
};

/// Number of clients shown in the top-clients report.
pub const TOP_CLIENTS_LIMIT: usize = 5;

/// Days ahead covered by the cash forecast, inclusive of the last day.
pub const FORECAST_HORIZON_DAYS: u64 = 30;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates the report selected by `kind` from a snapshot.
    ///
    /// `as_of` anchors the time-dependent reports: revenue-vs-expense
    /// covers the calendar month containing it, and the cash forecast
    /// window starts at it.
    #[must_use]
    pub fn generate(kind: ReportKind, data: &FinanceSnapshot, as_of: NaiveDate) -> Report {
        match kind {
            ReportKind::CashFlowByMonth => {
                Report::CashFlowByMonth(Self::cash_flow_by_month(&data.ledger_entries))
            }
            ReportKind::PayablesBySupplier => {
                Report::PayablesBySupplier(Self::payables_by_supplier(&data.payables))
            }
            ReportKind::StatusBreakdown => {
                Report::StatusBreakdown(Self::status_breakdown(&data.payables, &data.receivables))
            }
            ReportKind::TopClients => {
                Report::TopClients(Self::top_clients(&data.receivables, &data.clients))
            }
            ReportKind::RevenueVsExpense => Report::RevenueVsExpense(Self::revenue_vs_expense(
                &data.ledger_entries,
                YearMonth::of(as_of),
            )),
            ReportKind::CashForecast => {
                Report::CashForecast(Self::cash_forecast(&data.payables, &data.receivables, as_of))
            }
        }
    }

    /// Buckets ledger entries into per-month inflow and outflow totals.
    ///
    /// Months are keyed by year and month together, so January entries
    /// from different years land in different rows. Rows come out in
    /// ascending month order, and a month with entries on only one side
    /// shows zero on the other.
    #[must_use]
    pub fn cash_flow_by_month(entries: &[LedgerEntry]) -> CashFlowByMonthReport {
        let mut months: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();
        for entry in entries {
            let bucket = months.entry(YearMonth::of(entry.date)).or_default();
            match entry.kind {
                EntryKind::Inflow => bucket.0 += entry.amount,
                EntryKind::Outflow => bucket.1 += entry.amount,
            }
        }

        let mut total_inflow = Decimal::ZERO;
        let mut total_outflow = Decimal::ZERO;
        let rows: Vec<MonthlyFlow> = months
            .into_iter()
            .map(|(month, (inflow, outflow))| {
                total_inflow += inflow;
                total_outflow += outflow;
                MonthlyFlow {
                    month,
                    inflow,
                    outflow,
                }
            })
            .collect();

        CashFlowByMonthReport {
            rows,
            total_inflow,
            total_outflow,
        }
    }

    /// Totals payables per supplier, largest total first.
    ///
    /// Groups are built in first-appearance order, then sorted by total
    /// descending with a stable sort, so equal totals keep their relative
    /// input order.
    #[must_use]
    pub fn payables_by_supplier(payables: &[Payable]) -> PayablesBySupplierReport {
        let mut suppliers: Vec<SupplierTotal> = Vec::new();
        for payable in payables {
            match suppliers
                .iter_mut()
                .find(|row| row.supplier == payable.supplier)
            {
                Some(row) => row.total += payable.amount,
                None => suppliers.push(SupplierTotal {
                    supplier: payable.supplier.clone(),
                    total: payable.amount,
                }),
            }
        }
        suppliers.sort_by(|a, b| b.total.cmp(&a.total));

        let grand_total = suppliers.iter().map(|row| row.total).sum();

        PayablesBySupplierReport {
            suppliers,
            grand_total,
        }
    }

    /// Counts payables and receivables per settlement status.
    ///
    /// A status appears when at least one collection has a row with it;
    /// the other column then reads zero. Rows come out in enum order.
    #[must_use]
    pub fn status_breakdown(
        payables: &[Payable],
        receivables: &[Receivable],
    ) -> StatusBreakdownReport {
        let rows = SettlementStatus::ALL
            .into_iter()
            .filter_map(|status| {
                let payable_count = payables.iter().filter(|p| p.status == status).count() as u64;
                let receivable_count =
                    receivables.iter().filter(|r| r.status == status).count() as u64;

                (payable_count > 0 || receivable_count > 0).then(|| StatusCount {
                    status,
                    payables: payable_count,
                    receivables: receivable_count,
                })
            })
            .collect();

        StatusBreakdownReport { rows }
    }

    /// Ranks clients by total received revenue and keeps the top five.
    ///
    /// Only receivables marked received count. Rows join the client
    /// roster by id and group by client name; rows with no matching
    /// client are dropped, as an inner join would do. Equal totals keep
    /// first-appearance order.
    #[must_use]
    pub fn top_clients(receivables: &[Receivable], clients: &[Client]) -> TopClientsReport {
        let names: HashMap<i32, &str> = clients
            .iter()
            .map(|client| (client.id, client.name.as_str()))
            .collect();

        let mut totals: Vec<ClientRevenue> = Vec::new();
        for receivable in receivables {
            if receivable.status != SettlementStatus::Received {
                continue;
            }
            let Some(name) = names.get(&receivable.client_id) else {
                continue;
            };
            match totals.iter_mut().find(|row| row.client == *name) {
                Some(row) => row.total += receivable.amount,
                None => totals.push(ClientRevenue {
                    client: (*name).to_string(),
                    total: receivable.amount,
                }),
            }
        }
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals.truncate(TOP_CLIENTS_LIMIT);

        TopClientsReport { clients: totals }
    }

    /// Sums inflows (revenue) and outflows (expense) for one month.
    #[must_use]
    pub fn revenue_vs_expense(entries: &[LedgerEntry], month: YearMonth) -> RevenueVsExpenseReport {
        let mut revenue = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for entry in entries {
            if YearMonth::of(entry.date) != month {
                continue;
            }
            match entry.kind {
                EntryKind::Inflow => revenue += entry.amount,
                EntryKind::Outflow => expense += entry.amount,
            }
        }

        RevenueVsExpenseReport {
            month,
            revenue,
            expense,
            net: revenue - expense,
        }
    }

    /// Projects pending cash movements over the next thirty days.
    ///
    /// The window runs from `today` through `today + 30` days, both ends
    /// inclusive. Only pending rows count; settled ones are already cash.
    /// The matching rows ride along for detail display, in input order.
    #[must_use]
    pub fn cash_forecast(
        payables: &[Payable],
        receivables: &[Receivable],
        today: NaiveDate,
    ) -> CashForecastReport {
        let window = ForecastWindow::days_ahead(today, FORECAST_HORIZON_DAYS);

        let receivables: Vec<Receivable> = receivables
            .iter()
            .filter(|r| r.status == SettlementStatus::Pending && window.contains(r.due_date))
            .cloned()
            .collect();
        let payables: Vec<Payable> = payables
            .iter()
            .filter(|p| p.status == SettlementStatus::Pending && window.contains(p.due_date))
            .cloned()
            .collect();

        let total_receivable: Decimal = receivables.iter().map(|r| r.amount).sum();
        let total_payable: Decimal = payables.iter().map(|p| p.amount).sum();

        CashForecastReport {
            window,
            total_receivable,
            total_payable,
            net: total_receivable - total_payable,
            receivables,
            payables,
        }
    }
}
