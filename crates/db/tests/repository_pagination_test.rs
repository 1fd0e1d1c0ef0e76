//! Integration tests for the CRUD repositories.
//!
//! Covers pagination, filtering and ordering against an in-memory `SQLite`
//! database with migrations applied.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use finboard_core::domain::{EntryKind, SettlementStatus};
use finboard_db::migration::{Migrator, MigratorTrait};
use finboard_db::{
    ClientRepository, LedgerEntryRepository, PayableRepository, ReceivableRepository,
};
use finboard_shared::types::PageRequest;

/// Connects to a fresh in-memory database and applies migrations.
///
/// The pool is pinned to a single connection so every query sees the same
/// in-memory database.
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

fn page(page: u32, per_page: u32) -> PageRequest {
    PageRequest { page, per_page }
}

#[tokio::test]
async fn test_client_list_pages_and_counts() {
    let db = setup_db().await;
    let repo = ClientRepository::new(db);

    for i in 1..=25 {
        repo.create(&format!("Client {i:02}"))
            .await
            .expect("Failed to create client");
    }

    let (rows, total) = repo
        .list(&page(2, 10))
        .await
        .expect("Failed to list clients");
    assert_eq!(total, 25);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].name, "Client 11");

    let (rows, total) = repo
        .list(&page(3, 10))
        .await
        .expect("Failed to list clients");
    assert_eq!(total, 25);
    assert_eq!(rows.len(), 5);

    let (rows, _) = repo
        .list(&page(4, 10))
        .await
        .expect("Failed to list clients");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_client_list_orders_by_name() {
    let db = setup_db().await;
    let repo = ClientRepository::new(db);

    repo.create("Zenith Trading")
        .await
        .expect("Failed to create client");
    repo.create("Acme Supplies")
        .await
        .expect("Failed to create client");
    repo.create("Midway Logistics")
        .await
        .expect("Failed to create client");

    let (rows, _) = repo
        .list(&PageRequest::default())
        .await
        .expect("Failed to list clients");

    let names: Vec<&str> = rows.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Acme Supplies", "Midway Logistics", "Zenith Trading"]
    );
}

#[tokio::test]
async fn test_client_find_and_count() {
    let db = setup_db().await;
    let repo = ClientRepository::new(db);

    let created = repo
        .create("Globex Corporation")
        .await
        .expect("Failed to create client");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to query client")
        .expect("Client should exist");
    assert_eq!(found.name, "Globex Corporation");

    let missing = repo
        .find_by_id(created.id + 1)
        .await
        .expect("Failed to query client");
    assert!(missing.is_none());

    assert_eq!(repo.count().await.expect("Failed to count clients"), 1);
}

#[tokio::test]
async fn test_payable_list_filters_by_status_and_orders_by_due_date() {
    let db = setup_db().await;
    let repo = PayableRepository::new(db);

    repo.create(
        "Initech Ltd",
        dec!(30.00),
        date(2026, 9, 20),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create payable");
    repo.create(
        "Acme Supplies",
        dec!(10.00),
        date(2026, 9, 5),
        SettlementStatus::Paid,
    )
    .await
    .expect("Failed to create payable");
    repo.create(
        "Umbrella Services",
        dec!(20.00),
        date(2026, 9, 1),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create payable");

    let (rows, total) = repo
        .list(Some(SettlementStatus::Pending), &PageRequest::default())
        .await
        .expect("Failed to list payables");
    assert_eq!(total, 2);
    let suppliers: Vec<&str> = rows.iter().map(|p| p.supplier.as_str()).collect();
    assert_eq!(suppliers, vec!["Umbrella Services", "Initech Ltd"]);

    let (all_rows, all_total) = repo
        .list(None, &PageRequest::default())
        .await
        .expect("Failed to list payables");
    assert_eq!(all_total, 3);
    assert_eq!(all_rows[0].supplier, "Umbrella Services");
    assert_eq!(all_rows[2].supplier, "Initech Ltd");
}

#[tokio::test]
async fn test_receivable_requires_existing_client() {
    let db = setup_db().await;
    let clients = ClientRepository::new(db.clone());
    let repo = ReceivableRepository::new(db);

    let client = clients
        .create("Globex Corporation")
        .await
        .expect("Failed to create client");

    repo.create(
        client.id,
        dec!(55.00),
        date(2026, 10, 1),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create receivable");

    let orphan = repo
        .create(
            client.id + 99,
            dec!(10.00),
            date(2026, 10, 1),
            SettlementStatus::Pending,
        )
        .await;
    assert!(orphan.is_err(), "Foreign key must reject unknown clients");
}

#[tokio::test]
async fn test_receivable_list_filters_by_status() {
    let db = setup_db().await;
    let clients = ClientRepository::new(db.clone());
    let repo = ReceivableRepository::new(db);

    let client = clients
        .create("Globex Corporation")
        .await
        .expect("Failed to create client");

    repo.create(
        client.id,
        dec!(100.00),
        date(2026, 9, 1),
        SettlementStatus::Received,
    )
    .await
    .expect("Failed to create receivable");
    repo.create(
        client.id,
        dec!(40.00),
        date(2026, 9, 2),
        SettlementStatus::Pending,
    )
    .await
    .expect("Failed to create receivable");

    let (rows, total) = repo
        .list(Some(SettlementStatus::Received), &PageRequest::default())
        .await
        .expect("Failed to list receivables");
    assert_eq!(total, 1);
    assert_eq!(rows[0].amount, dec!(100.00));
}

#[tokio::test]
async fn test_ledger_entry_list_filters_by_kind() {
    let db = setup_db().await;
    let repo = LedgerEntryRepository::new(db);

    repo.create(EntryKind::Inflow, dec!(100.00), date(2026, 8, 10))
        .await
        .expect("Failed to create ledger entry");
    repo.create(EntryKind::Outflow, dec!(60.00), date(2026, 8, 5))
        .await
        .expect("Failed to create ledger entry");
    repo.create(EntryKind::Inflow, dec!(25.00), date(2026, 8, 1))
        .await
        .expect("Failed to create ledger entry");

    let (rows, total) = repo
        .list(Some(EntryKind::Inflow), &PageRequest::default())
        .await
        .expect("Failed to list ledger entries");
    assert_eq!(total, 2);
    // Ordered by entry date, not insertion order.
    assert_eq!(rows[0].amount, dec!(25.00));
    assert_eq!(rows[1].amount, dec!(100.00));

    let (all_rows, all_total) = repo
        .list(None, &PageRequest::default())
        .await
        .expect("Failed to list ledger entries");
    assert_eq!(all_total, 3);
    assert_eq!(all_rows[0].entry_date, date(2026, 8, 1));
}
