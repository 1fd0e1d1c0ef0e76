//! Report repository assembling report inputs from the database.
//!
//! Loads full tables into a [`FinanceSnapshot`] and decodes stored status
//! and kind strings into their domain enums. Decoding happens here, once,
//! so the report engine never sees raw column values.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use tracing::debug;

use finboard_core::domain::{Client, LedgerEntry, Payable, Receivable};
use finboard_core::reports::{FinanceSnapshot, ReportError};

use crate::entities::{clients, ledger_entries, payables, receivables};

/// Error types for snapshot loading.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// A stored row violates the report input contract.
    #[error(transparent)]
    Contract(#[from] ReportError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Converts a client row into its domain form.
fn client_from_model(model: clients::Model) -> Client {
    Client {
        id: model.id,
        name: model.name,
    }
}

/// Converts a payable row, rejecting negative amounts and unknown statuses.
fn payable_from_model(model: payables::Model) -> Result<Payable, ReportError> {
    if model.amount < Decimal::ZERO {
        return Err(ReportError::NegativeAmount {
            entity: "payables",
            id: model.id,
        });
    }

    Ok(Payable {
        id: model.id,
        supplier: model.supplier,
        amount: model.amount,
        due_date: model.due_date,
        status: model.status.parse()?,
    })
}

/// Converts a receivable row, rejecting negative amounts and unknown statuses.
fn receivable_from_model(model: receivables::Model) -> Result<Receivable, ReportError> {
    if model.amount < Decimal::ZERO {
        return Err(ReportError::NegativeAmount {
            entity: "receivables",
            id: model.id,
        });
    }

    Ok(Receivable {
        id: model.id,
        client_id: model.client_id,
        amount: model.amount,
        due_date: model.due_date,
        status: model.status.parse()?,
    })
}

/// Converts a ledger entry row, rejecting negative amounts and unknown kinds.
fn ledger_entry_from_model(model: ledger_entries::Model) -> Result<LedgerEntry, ReportError> {
    if model.amount < Decimal::ZERO {
        return Err(ReportError::NegativeAmount {
            entity: "ledger_entries",
            id: model.id,
        });
    }

    Ok(LedgerEntry {
        id: model.id,
        kind: model.kind.parse()?,
        amount: model.amount,
        date: model.entry_date,
    })
}

/// Report repository loading snapshot inputs for the report engine.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the client roster in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn load_clients(&self) -> Result<Vec<Client>, SnapshotError> {
        let rows = clients::Entity::find()
            .order_by_asc(clients::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(client_from_model).collect())
    }

    /// Loads all payables in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row violates the
    /// report input contract.
    pub async fn load_payables(&self) -> Result<Vec<Payable>, SnapshotError> {
        let rows = payables::Entity::find()
            .order_by_asc(payables::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|row| payable_from_model(row).map_err(SnapshotError::from))
            .collect()
    }

    /// Loads all receivables in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row violates the
    /// report input contract.
    pub async fn load_receivables(&self) -> Result<Vec<Receivable>, SnapshotError> {
        let rows = receivables::Entity::find()
            .order_by_asc(receivables::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|row| receivable_from_model(row).map_err(SnapshotError::from))
            .collect()
    }

    /// Loads all ledger entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row violates the
    /// report input contract.
    pub async fn load_ledger_entries(&self) -> Result<Vec<LedgerEntry>, SnapshotError> {
        let rows = ledger_entries::Entity::find()
            .order_by_asc(ledger_entries::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|row| ledger_entry_from_model(row).map_err(SnapshotError::from))
            .collect()
    }

    /// Loads the full finance snapshot the report engine consumes.
    ///
    /// Row order within each collection follows insertion order, which the
    /// engine relies on when breaking ties.
    ///
    /// # Errors
    ///
    /// Returns an error if any table fails to load or any row violates the
    /// report input contract.
    pub async fn load_snapshot(&self) -> Result<FinanceSnapshot, SnapshotError> {
        let clients = self.load_clients().await?;
        let payables = self.load_payables().await?;
        let receivables = self.load_receivables().await?;
        let ledger_entries = self.load_ledger_entries().await?;

        debug!(
            clients = clients.len(),
            payables = payables.len(),
            receivables = receivables.len(),
            ledger_entries = ledger_entries.len(),
            "Loaded finance snapshot"
        );

        Ok(FinanceSnapshot {
            clients,
            payables,
            receivables,
            ledger_entries,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
