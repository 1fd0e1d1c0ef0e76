//! Database seeder for Finboard development and testing.
//!
//! Seeds clients, receivables, payables and six months of ledger entries
//! so every dashboard report has data to show. Dates are relative to the
//! current day, which keeps the cash forecast window populated.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use finboard_core::domain::{EntryKind, SettlementStatus};
use finboard_db::{ClientRepository, LedgerEntryRepository, PayableRepository, ReceivableRepository};
use finboard_shared::AppConfig;
use sea_orm::DatabaseConnection;

/// Client roster seeded for development.
const CLIENTS: [&str; 5] = [
    "Globex Corporation",
    "Initech Ltd",
    "Umbrella Services",
    "Stark Industries",
    "Wayne Enterprises",
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = finboard_db::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    // Idempotence check: an already-seeded database is left untouched.
    match ClientRepository::new(db.clone()).count().await {
        Ok(0) => {}
        Ok(_) => {
            println!("Database already seeded, skipping...");
            return;
        }
        Err(e) => {
            eprintln!("Failed to check existing data: {e}");
            return;
        }
    }

    println!("Seeding clients and receivables...");
    seed_clients_and_receivables(&db).await;

    println!("Seeding payables...");
    seed_payables(&db).await;

    println!("Seeding ledger entries...");
    seed_ledger_entries(&db).await;

    println!("Seeding complete!");
}

fn amount(s: &str) -> Decimal {
    Decimal::from_str(s).expect("Seed amounts are well-formed")
}

/// Seeds the client roster and a spread of receivables per client.
async fn seed_clients_and_receivables(db: &DatabaseConnection) {
    let clients = ClientRepository::new(db.clone());
    let receivables = ReceivableRepository::new(db.clone());
    let today = Utc::now().date_naive();

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for name in CLIENTS {
        match clients.create(name).await {
            Ok(client) => {
                println!("  Created client: {name}");
                client_ids.push(client.id);
            }
            Err(e) => {
                eprintln!("Failed to insert client {name}: {e}");
                return;
            }
        }
    }

    // (client index, amount, due date offset in days, status)
    let rows = [
        (0, "1250.00", 10, SettlementStatus::Pending),
        (0, "840.00", -20, SettlementStatus::Received),
        (1, "430.50", 25, SettlementStatus::Pending),
        (1, "990.00", -45, SettlementStatus::Received),
        (2, "310.00", 45, SettlementStatus::Pending),
        (2, "275.25", -10, SettlementStatus::Received),
        (3, "1600.00", 5, SettlementStatus::Pending),
        (3, "720.00", -60, SettlementStatus::Received),
        (4, "150.00", 18, SettlementStatus::Pending),
        (4, "2100.00", -5, SettlementStatus::Received),
    ];

    for (idx, value, offset, status) in rows {
        let due_date = today + Duration::days(offset);
        if let Err(e) = receivables
            .create(client_ids[idx], amount(value), due_date, status)
            .await
        {
            eprintln!("Failed to insert receivable: {e}");
        }
    }
    println!("  Created {} receivables", rows.len());
}

/// Seeds payables inside and outside the forecast window, plus settled ones.
async fn seed_payables(db: &DatabaseConnection) {
    let payables = PayableRepository::new(db.clone());
    let today = Utc::now().date_naive();

    // (supplier, amount, due date offset in days, status)
    let rows = [
        ("Acme Supplies", "560.00", 7, SettlementStatus::Pending),
        ("Northwind Traders", "1200.00", 20, SettlementStatus::Pending),
        ("Pinnacle Logistics", "89.90", 45, SettlementStatus::Pending),
        ("Acme Supplies", "430.00", -15, SettlementStatus::Paid),
        ("Vertex Consulting", "2500.00", -40, SettlementStatus::Paid),
        ("Northwind Traders", "310.75", 28, SettlementStatus::Pending),
    ];

    for (supplier, value, offset, status) in rows {
        let due_date = today + Duration::days(offset);
        if let Err(e) = payables
            .create(supplier, amount(value), due_date, status)
            .await
        {
            eprintln!("Failed to insert payable for {supplier}: {e}");
        }
    }
    println!("  Created {} payables", rows.len());
}

/// Seeds six months of inflow and outflow entries.
async fn seed_ledger_entries(db: &DatabaseConnection) {
    let ledger = LedgerEntryRepository::new(db.clone());
    let today = Utc::now().date_naive();

    for months_back in 0..6i64 {
        let entry_date = today - Duration::days(months_back * 30 + 3);
        let inflow = Decimal::from(4200 + months_back * 350);
        let outflow = Decimal::from(3100 + months_back * 180);

        if let Err(e) = ledger.create(EntryKind::Inflow, inflow, entry_date).await {
            eprintln!("Failed to insert inflow entry: {e}");
        }
        if let Err(e) = ledger.create(EntryKind::Outflow, outflow, entry_date).await {
            eprintln!("Failed to insert outflow entry: {e}");
        }
    }
    println!("  Created 12 ledger entries");
}
