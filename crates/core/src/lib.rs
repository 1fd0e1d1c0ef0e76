//! Core business logic for Finboard.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and report calculations live here.
//!
//! # Modules
//!
//! - `domain` - Clients, payables, receivables, and ledger entries
//! - `reports` - The built-in financial reports

pub mod domain;
pub mod reports;
