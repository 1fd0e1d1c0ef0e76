//! Initial database migration.
//!
//! Creates the clients, payables, receivables and ledger_entries tables.
//! Written with the schema builder rather than raw SQL so the same
//! migration runs on both `SQLite` and Postgres.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // PART 1: CLIENTS
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::Name).string_len(120).not_null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 2: PAYABLES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Payables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payables::Supplier)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Payables::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payables::DueDate).date().not_null())
                    .col(ColumnDef::new(Payables::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Payables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 3: RECEIVABLES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Receivables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Receivables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Receivables::ClientId).integer().not_null())
                    .col(
                        ColumnDef::new(Receivables::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Receivables::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(Receivables::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Receivables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receivables_client")
                            .from(Receivables::Table, Receivables::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 4: LEDGER ENTRIES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(LedgerEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LedgerEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LedgerEntries::Kind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LedgerEntries::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(LedgerEntries::EntryDate).date().not_null())
                    .col(
                        ColumnDef::new(LedgerEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // PART 5: INDEXES
        // ============================================================
        manager
            .create_index(
                Index::create()
                    .name("idx_payables_due_date")
                    .table(Payables::Table)
                    .col(Payables::DueDate)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_receivables_due_date")
                    .table(Receivables::Table)
                    .col(Receivables::DueDate)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_receivables_client_id")
                    .table(Receivables::Table)
                    .col(Receivables::ClientId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entries_entry_date")
                    .table(LedgerEntries::Table)
                    .col(LedgerEntries::EntryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse creation order so foreign keys do not block the drops.
        manager
            .drop_table(Table::drop().table(LedgerEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Receivables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Payables {
    Table,
    Id,
    Supplier,
    Amount,
    DueDate,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Receivables {
    Table,
    Id,
    ClientId,
    Amount,
    DueDate,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LedgerEntries {
    Table,
    Id,
    Kind,
    Amount,
    EntryDate,
    CreatedAt,
}
