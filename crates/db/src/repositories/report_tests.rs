//! Tests for the report repository.
//!
//! Unit tests for the row converters. Loading order and end-to-end snapshot
//! assembly are covered by the integration tests in `tests/`.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finboard_core::domain::{DomainError, EntryKind, SettlementStatus};
use finboard_core::reports::ReportError;

use super::{ledger_entry_from_model, payable_from_model, receivable_from_model};
use crate::entities::{ledger_entries, payables, receivables};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn payable_row(id: i32, amount: Decimal, status: &str) -> payables::Model {
    payables::Model {
        id,
        supplier: "Acme Supplies".to_string(),
        amount,
        due_date: date(2026, 8, 1),
        status: status.to_string(),
        created_at: chrono::Utc::now().into(),
    }
}

fn receivable_row(id: i32, amount: Decimal, status: &str) -> receivables::Model {
    receivables::Model {
        id,
        client_id: 1,
        amount,
        due_date: date(2026, 8, 1),
        status: status.to_string(),
        created_at: chrono::Utc::now().into(),
    }
}

fn ledger_row(id: i32, amount: Decimal, kind: &str) -> ledger_entries::Model {
    ledger_entries::Model {
        id,
        kind: kind.to_string(),
        amount,
        entry_date: date(2026, 8, 1),
        created_at: chrono::Utc::now().into(),
    }
}

#[test]
fn payable_converts_and_decodes_status() {
    let payable = payable_from_model(payable_row(7, dec!(120.50), "pending")).unwrap();

    assert_eq!(payable.id, 7);
    assert_eq!(payable.amount, dec!(120.50));
    assert_eq!(payable.status, SettlementStatus::Pending);
}

#[test]
fn payable_status_decoding_is_case_insensitive() {
    let payable = payable_from_model(payable_row(1, dec!(10), "Paid")).unwrap();

    assert_eq!(payable.status, SettlementStatus::Paid);
}

#[test]
fn payable_rejects_unknown_status() {
    let err = payable_from_model(payable_row(3, dec!(10), "overdue")).unwrap_err();

    assert_eq!(
        err,
        ReportError::Domain(DomainError::UnknownStatus("overdue".to_string()))
    );
}

#[test]
fn payable_rejects_negative_amount() {
    let err = payable_from_model(payable_row(9, dec!(-5), "pending")).unwrap_err();

    assert_eq!(
        err,
        ReportError::NegativeAmount {
            entity: "payables",
            id: 9
        }
    );
}

#[test]
fn receivable_converts_and_keeps_client_id() {
    let receivable = receivable_from_model(receivable_row(4, dec!(75), "received")).unwrap();

    assert_eq!(receivable.client_id, 1);
    assert_eq!(receivable.status, SettlementStatus::Received);
}

#[test]
fn receivable_rejects_negative_amount() {
    let err = receivable_from_model(receivable_row(2, dec!(-0.01), "pending")).unwrap_err();

    assert_eq!(
        err,
        ReportError::NegativeAmount {
            entity: "receivables",
            id: 2
        }
    );
}

#[test]
fn ledger_entry_converts_and_decodes_kind() {
    let entry = ledger_entry_from_model(ledger_row(11, dec!(300), "inflow")).unwrap();

    assert_eq!(entry.kind, EntryKind::Inflow);
    assert_eq!(entry.date, date(2026, 8, 1));
}

#[test]
fn ledger_entry_rejects_unknown_kind() {
    let err = ledger_entry_from_model(ledger_row(5, dec!(10), "transfer")).unwrap_err();

    assert_eq!(
        err,
        ReportError::Domain(DomainError::UnknownEntryKind("transfer".to_string()))
    );
}

/// Strategy for generating non-negative decimal amounts with two places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating stored status strings.
fn status_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("pending"), Just("paid"), Just("received")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property: conversion never alters the amount**
    ///
    /// *For any* non-negative amount and known status, the converted payable
    /// carries the stored amount unchanged.
    #[test]
    fn prop_payable_amount_preserved(
        amount in amount_strategy(),
        status in status_strategy(),
    ) {
        let payable = payable_from_model(payable_row(1, amount, status)).unwrap();
        prop_assert_eq!(payable.amount, amount);
    }

    /// **Property: negative amounts never convert**
    ///
    /// *For any* strictly negative amount, conversion fails with a
    /// `NegativeAmount` error naming the payables collection.
    #[test]
    fn prop_negative_amount_rejected(cents in 1i64..1_000_000i64) {
        let amount = Decimal::new(-cents, 2);
        let err = payable_from_model(payable_row(1, amount, "pending")).unwrap_err();
        prop_assert_eq!(
            err,
            ReportError::NegativeAmount { entity: "payables", id: 1 }
        );
    }
}
