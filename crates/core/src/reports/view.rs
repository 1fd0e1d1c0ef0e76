//! Presentation-ready report rendering.
//!
//! Turns a [`Report`] into tables and chart series a frontend can display
//! without knowing any report-specific shape. Amounts render with two
//! decimal places; counts render as plain integers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Report, ReportKind};

/// A rendered table: a title, column headers, and stringly rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Table heading.
    pub title: String,
    /// Column headers, left to right.
    pub columns: Vec<String>,
    /// Data rows; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn new(title: &str, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.to_string(),
            columns: columns.iter().map(ToString::to_string).collect(),
            rows,
        }
    }
}

/// A labeled numeric series for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    /// Series name shown in the legend.
    pub name: String,
    /// One point per chart label.
    pub points: Vec<Decimal>,
}

/// Chart payload: one label per x position plus one or more series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// X-axis labels.
    pub labels: Vec<String>,
    /// The series to plot against the labels.
    pub series: Vec<SeriesData>,
}

/// A report bundled with its presentation tables and optional chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    /// Report title.
    pub title: String,
    /// The main table.
    pub table: TableView,
    /// Chart series, where a chart is meaningful for the report.
    pub chart: Option<ChartSeries>,
    /// Supporting detail tables (the cash forecast lists its rows here).
    pub details: Vec<TableView>,
    /// The underlying report data.
    pub report: Report,
}

fn money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

impl Report {
    /// Renders this report for display.
    #[must_use]
    pub fn into_view(self) -> ReportView {
        let title = self.kind().title().to_string();
        let (table, chart, details) = match &self {
            Self::CashFlowByMonth(report) => {
                let rows = report
                    .rows
                    .iter()
                    .map(|row| {
                        vec![row.month.to_string(), money(row.inflow), money(row.outflow)]
                    })
                    .collect();
                let chart = ChartSeries {
                    labels: report.rows.iter().map(|row| row.month.to_string()).collect(),
                    series: vec![
                        SeriesData {
                            name: "Inflow".to_string(),
                            points: report.rows.iter().map(|row| row.inflow).collect(),
                        },
                        SeriesData {
                            name: "Outflow".to_string(),
                            points: report.rows.iter().map(|row| row.outflow).collect(),
                        },
                    ],
                };
                let table = TableView::new(&title, &["Month", "Inflow", "Outflow"], rows);
                (table, Some(chart), Vec::new())
            }
            Self::PayablesBySupplier(report) => {
                let rows = report
                    .suppliers
                    .iter()
                    .map(|row| vec![row.supplier.clone(), money(row.total)])
                    .collect();
                let chart = ChartSeries {
                    labels: report
                        .suppliers
                        .iter()
                        .map(|row| row.supplier.clone())
                        .collect(),
                    series: vec![SeriesData {
                        name: "Total".to_string(),
                        points: report.suppliers.iter().map(|row| row.total).collect(),
                    }],
                };
                let table = TableView::new(&title, &["Supplier", "Total"], rows);
                (table, Some(chart), Vec::new())
            }
            Self::StatusBreakdown(report) => {
                let rows = report
                    .rows
                    .iter()
                    .map(|row| {
                        vec![
                            row.status.to_string(),
                            row.payables.to_string(),
                            row.receivables.to_string(),
                        ]
                    })
                    .collect();
                let chart = ChartSeries {
                    labels: report.rows.iter().map(|row| row.status.to_string()).collect(),
                    series: vec![
                        SeriesData {
                            name: "Payables".to_string(),
                            points: report.rows.iter().map(|row| row.payables.into()).collect(),
                        },
                        SeriesData {
                            name: "Receivables".to_string(),
                            points: report
                                .rows
                                .iter()
                                .map(|row| row.receivables.into())
                                .collect(),
                        },
                    ],
                };
                let table =
                    TableView::new(&title, &["Status", "Payables", "Receivables"], rows);
                (table, Some(chart), Vec::new())
            }
            Self::TopClients(report) => {
                let rows = report
                    .clients
                    .iter()
                    .map(|row| vec![row.client.clone(), money(row.total)])
                    .collect();
                let chart = ChartSeries {
                    labels: report.clients.iter().map(|row| row.client.clone()).collect(),
                    series: vec![SeriesData {
                        name: "Revenue".to_string(),
                        points: report.clients.iter().map(|row| row.total).collect(),
                    }],
                };
                let table = TableView::new(&title, &["Client", "Revenue"], rows);
                (table, Some(chart), Vec::new())
            }
            Self::RevenueVsExpense(report) => {
                let rows = vec![
                    vec!["Revenue".to_string(), money(report.revenue)],
                    vec!["Expense".to_string(), money(report.expense)],
                    vec!["Net".to_string(), money(report.net)],
                ];
                let chart = ChartSeries {
                    labels: vec!["Revenue".to_string(), "Expense".to_string()],
                    series: vec![SeriesData {
                        name: report.month.to_string(),
                        points: vec![report.revenue, report.expense],
                    }],
                };
                let table = TableView::new(&title, &["Category", "Amount"], rows);
                (table, Some(chart), Vec::new())
            }
            Self::CashForecast(report) => {
                let rows = vec![
                    vec!["Receivable in window".to_string(), money(report.total_receivable)],
                    vec!["Payable in window".to_string(), money(report.total_payable)],
                    vec!["Net position".to_string(), money(report.net)],
                ];
                let receivable_rows = report
                    .receivables
                    .iter()
                    .map(|r| vec![money(r.amount), r.due_date.to_string()])
                    .collect();
                let payable_rows = report
                    .payables
                    .iter()
                    .map(|p| vec![money(p.amount), p.due_date.to_string()])
                    .collect();
                let details = vec![
                    TableView::new(
                        "Receivables due in window",
                        &["Amount", "Due Date"],
                        receivable_rows,
                    ),
                    TableView::new(
                        "Payables due in window",
                        &["Amount", "Due Date"],
                        payable_rows,
                    ),
                ];
                let table = TableView::new(&title, &["Metric", "Amount"], rows);
                // No chart: two totals and a net make a poor bar chart.
                (table, None, details)
            }
        };

        ReportView {
            title,
            table,
            chart,
            details,
            report: self,
        }
    }
}

/// Builds the report menu: one `(selector, title)` pair per report.
#[must_use]
pub fn report_menu() -> Vec<(&'static str, &'static str)> {
    ReportKind::ALL
        .into_iter()
        .map(|kind| (kind.selector(), kind.title()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::{EntryKind, LedgerEntry, YearMonth};
    use crate::reports::types::{CashFlowByMonthReport, MonthlyFlow};
    use crate::reports::ReportService;

    #[test]
    fn test_money_cells_use_two_decimal_places() {
        let report = CashFlowByMonthReport {
            rows: vec![MonthlyFlow {
                month: YearMonth {
                    year: 2024,
                    month: 1,
                },
                inflow: dec!(100),
                outflow: dec!(40.5),
            }],
            total_inflow: dec!(100),
            total_outflow: dec!(40.5),
        };

        let view = Report::CashFlowByMonth(report).into_view();

        assert_eq!(view.table.rows, vec![vec![
            "2024-01".to_string(),
            "100.00".to_string(),
            "40.50".to_string(),
        ]]);
    }

    #[test]
    fn test_cash_flow_view_has_chart_and_no_details() {
        let entries = vec![LedgerEntry {
            id: 1,
            kind: EntryKind::Inflow,
            amount: dec!(10),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }];
        let report = ReportService::cash_flow_by_month(&entries);

        let view = Report::CashFlowByMonth(report).into_view();

        assert_eq!(view.title, "Cash Flow by Month");
        assert_eq!(view.table.columns, vec!["Month", "Inflow", "Outflow"]);
        let chart = view.chart.unwrap();
        assert_eq!(chart.labels, vec!["2024-01"]);
        assert_eq!(chart.series.len(), 2);
        assert!(view.details.is_empty());
    }

    #[test]
    fn test_forecast_view_has_details_and_no_chart() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let report = ReportService::cash_forecast(&[], &[], today);

        let view = Report::CashForecast(report).into_view();

        assert!(view.chart.is_none());
        assert_eq!(view.details.len(), 2);
        assert_eq!(view.details[0].title, "Receivables due in window");
        assert_eq!(view.details[1].title, "Payables due in window");
    }

    #[test]
    fn test_report_menu_lists_every_report_once() {
        let menu = report_menu();

        assert_eq!(menu.len(), ReportKind::ALL.len());
        assert_eq!(menu[0], ("cash-flow-by-month", "Cash Flow by Month"));
        assert_eq!(menu[5], ("cash-forecast", "Cash Forecast"));
    }
}
