//! Domain types for clients, payables, receivables, and ledger entries.
//!
//! These are the in-memory rows the report engine works on. Amounts are
//! always [`Decimal`]; dates are naive calendar dates. Raw status and
//! entry-kind strings from storage are parsed exactly once, at the
//! repository boundary, through the [`FromStr`] impls here.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding raw domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A settlement status string matched no known status.
    #[error("Unknown settlement status: {0}")]
    UnknownStatus(String),

    /// An entry kind string matched no known kind.
    #[error("Unknown entry kind: {0}")]
    UnknownEntryKind(String),
}

/// Settlement status shared by payables and receivables.
///
/// One closed set for both collections: payables settle as [`Paid`],
/// receivables as [`Received`], and both start out [`Pending`].
///
/// [`Paid`]: Self::Paid
/// [`Received`]: Self::Received
/// [`Pending`]: Self::Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    /// Not yet settled; still counts toward forecasts.
    Pending,
    /// Payable settled - money has left.
    Paid,
    /// Receivable settled - money has arrived.
    Received,
}

impl SettlementStatus {
    /// Every status, in presentation order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Received];

    /// Canonical storage form, as persisted and serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Received => "received",
        }
    }

    /// Human-readable label for tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Received => "Received",
        }
    }
}

impl fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettlementStatus {
    type Err = DomainError;

    /// Parses a status string, case-insensitively.
    ///
    /// Unknown values are an error, never coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "received" => Ok(Self::Received),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (revenue).
    Inflow,
    /// Money going out (expense).
    Outflow,
}

impl EntryKind {
    /// Canonical storage form, as persisted and serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inflow => "inflow",
            Self::Outflow => "outflow",
        }
    }

    /// Human-readable label for tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inflow => "Inflow",
            Self::Outflow => "Outflow",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inflow" => Ok(Self::Inflow),
            "outflow" => Ok(Self::Outflow),
            _ => Err(DomainError::UnknownEntryKind(s.to_string())),
        }
    }
}

/// A client that owes or has paid receivables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier.
    pub id: i32,
    /// Display name, used as the grouping key in revenue reports.
    pub name: String,
}

/// An amount owed to a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payable {
    /// Unique identifier.
    pub id: i32,
    /// Supplier the money is owed to.
    pub supplier: String,
    /// Amount owed. Non-negative.
    pub amount: Decimal,
    /// Date the payment falls due.
    pub due_date: NaiveDate,
    /// Current settlement status.
    pub status: SettlementStatus,
}

/// An amount owed by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receivable {
    /// Unique identifier.
    pub id: i32,
    /// Client that owes the money.
    pub client_id: i32,
    /// Amount owed. Non-negative.
    pub amount: Decimal,
    /// Date the payment falls due.
    pub due_date: NaiveDate,
    /// Current settlement status.
    pub status: SettlementStatus,
}

/// A dated cash movement in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier.
    pub id: i32,
    /// Whether money came in or went out.
    pub kind: EntryKind,
    /// Amount moved. Non-negative.
    pub amount: Decimal,
    /// Date the movement happened.
    pub date: NaiveDate,
}
