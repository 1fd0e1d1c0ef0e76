//! Integration tests for the report repository.
//!
//! Runs against an in-memory `SQLite` database with migrations applied.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use finboard_core::domain::{DomainError, EntryKind, SettlementStatus};
use finboard_core::reports::{Report, ReportError, ReportKind, ReportService};
use finboard_db::entities::{ledger_entries, payables};
use finboard_db::migration::{Migrator, MigratorTrait};
use finboard_db::{
    ClientRepository, LedgerEntryRepository, PayableRepository, ReceivableRepository,
    ReportRepository, repositories::SnapshotError,
};

/// Connects to a fresh in-memory database and applies migrations.
///
/// The pool is pinned to a single connection: each `SQLite` in-memory
/// connection gets its own database, so a larger pool would scatter
/// tables and data across connections.
async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_snapshot_loads_all_collections() {
    let db = setup_db().await;

    let clients = ClientRepository::new(db.clone());
    let receivables = ReceivableRepository::new(db.clone());
    let payables = PayableRepository::new(db.clone());
    let ledger = LedgerEntryRepository::new(db.clone());

    let client = clients
        .create("Globex Corporation")
        .await
        .expect("Failed to create client");
    receivables
        .create(
            client.id,
            dec!(150.00),
            date(2026, 9, 1),
            SettlementStatus::Pending,
        )
        .await
        .expect("Failed to create receivable");
    payables
        .create(
            "Initech Ltd",
            dec!(80.00),
            date(2026, 9, 10),
            SettlementStatus::Paid,
        )
        .await
        .expect("Failed to create payable");
    ledger
        .create(EntryKind::Inflow, dec!(42.00), date(2026, 8, 15))
        .await
        .expect("Failed to create ledger entry");

    let snapshot = ReportRepository::new(db)
        .load_snapshot()
        .await
        .expect("Failed to load snapshot");

    assert_eq!(snapshot.clients.len(), 1);
    assert_eq!(snapshot.clients[0].name, "Globex Corporation");
    assert_eq!(snapshot.receivables.len(), 1);
    assert_eq!(snapshot.receivables[0].client_id, client.id);
    assert_eq!(snapshot.receivables[0].status, SettlementStatus::Pending);
    assert_eq!(snapshot.payables.len(), 1);
    assert_eq!(snapshot.payables[0].status, SettlementStatus::Paid);
    assert_eq!(snapshot.ledger_entries.len(), 1);
    assert_eq!(snapshot.ledger_entries[0].kind, EntryKind::Inflow);
}

#[tokio::test]
async fn test_snapshot_preserves_insertion_order() {
    let db = setup_db().await;
    let repo = PayableRepository::new(db.clone());

    // Inserted out of due-date order; the snapshot must keep id order.
    repo.create(
        "Late Supplier",
        dec!(10.00),
        date(2026, 12, 1),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create payable");
    repo.create(
        "Early Supplier",
        dec!(20.00),
        date(2026, 1, 1),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create payable");

    let loaded = ReportRepository::new(db)
        .load_payables()
        .await
        .expect("Failed to load payables");

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].supplier, "Late Supplier");
    assert_eq!(loaded[1].supplier, "Early Supplier");
    assert!(loaded[0].id < loaded[1].id);
}

#[tokio::test]
async fn test_unknown_status_surfaces_domain_error() {
    let db = setup_db().await;

    // Bypass the repository to store a status no release ever wrote.
    let row = payables::ActiveModel {
        supplier: Set("Acme Supplies".to_string()),
        amount: Set(dec!(10.00)),
        due_date: Set(date(2026, 9, 1)),
        status: Set("weird".to_string()),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };
    row.insert(&db).await.expect("Failed to insert raw payable");

    let err = ReportRepository::new(db)
        .load_payables()
        .await
        .expect_err("Unknown status must not load");

    assert!(matches!(
        err,
        SnapshotError::Contract(ReportError::Domain(DomainError::UnknownStatus(s))) if s == "weird"
    ));
}

#[tokio::test]
async fn test_negative_amount_surfaces_contract_error() {
    let db = setup_db().await;

    let row = ledger_entries::ActiveModel {
        kind: Set("inflow".to_string()),
        amount: Set(dec!(-5.00)),
        entry_date: Set(date(2026, 8, 1)),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };
    let inserted = row
        .insert(&db)
        .await
        .expect("Failed to insert raw ledger entry");

    let err = ReportRepository::new(db)
        .load_ledger_entries()
        .await
        .expect_err("Negative amount must not load");

    assert!(matches!(
        err,
        SnapshotError::Contract(ReportError::NegativeAmount {
            entity: "ledger_entries",
            id,
        }) if id == inserted.id
    ));
}

#[tokio::test]
async fn test_snapshot_feeds_report_engine() {
    let db = setup_db().await;
    let ledger = LedgerEntryRepository::new(db.clone());

    ledger
        .create(EntryKind::Inflow, dec!(100.00), date(2026, 1, 10))
        .await
        .expect("Failed to create ledger entry");
    ledger
        .create(EntryKind::Outflow, dec!(40.00), date(2026, 1, 20))
        .await
        .expect("Failed to create ledger entry");
    ledger
        .create(EntryKind::Inflow, dec!(50.00), date(2026, 2, 5))
        .await
        .expect("Failed to create ledger entry");

    let snapshot = ReportRepository::new(db)
        .load_snapshot()
        .await
        .expect("Failed to load snapshot");
    let report = ReportService::generate(ReportKind::CashFlowByMonth, &snapshot, date(2026, 2, 5));

    match report {
        Report::CashFlowByMonth(cash_flow) => {
            assert_eq!(cash_flow.rows.len(), 2);
            assert_eq!(cash_flow.total_inflow, dec!(150.00));
            assert_eq!(cash_flow.total_outflow, dec!(40.00));
        }
        other => panic!("Expected cash flow report, got {other:?}"),
    }
}
