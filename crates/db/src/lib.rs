//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for clients, payables, receivables and ledger entries
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Repositories return typed rows; status and kind columns are stored as
//! plain strings and decoded into domain enums at the repository boundary.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    ClientRepository, LedgerEntryRepository, PayableRepository, ReceivableRepository,
    ReportRepository,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use finboard_shared::config::DatabaseConfig;

/// Establishes a connection pool against the configured database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);
    Database::connect(options).await
}
