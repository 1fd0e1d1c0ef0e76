//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod client;
pub mod ledger_entry;
pub mod payable;
pub mod receivable;
pub mod report;

pub use client::ClientRepository;
pub use ledger_entry::LedgerEntryRepository;
pub use payable::PayableRepository;
pub use receivable::ReceivableRepository;
pub use report::{ReportRepository, SnapshotError};
