//! `SeaORM` entity definitions.

pub mod clients;
pub mod ledger_entries;
pub mod payables;
pub mod receivables;
