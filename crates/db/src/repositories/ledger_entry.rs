//! Ledger entry repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use finboard_core::domain::EntryKind;
use finboard_shared::types::PageRequest;

use crate::entities::ledger_entries;

/// Ledger entry repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct LedgerEntryRepository {
    db: DatabaseConnection,
}

impl LedgerEntryRepository {
    /// Creates a new ledger entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new ledger entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        kind: EntryKind,
        amount: Decimal,
        entry_date: NaiveDate,
    ) -> Result<ledger_entries::Model, DbErr> {
        let entry = ledger_entries::ActiveModel {
            kind: Set(kind.as_str().to_owned()),
            amount: Set(amount),
            entry_date: Set(entry_date),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        entry.insert(&self.db).await
    }

    /// Finds a ledger entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ledger_entries::Model>, DbErr> {
        ledger_entries::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists ledger entries ordered by entry date, optionally filtered by
    /// kind, with the total row count for the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        kind: Option<EntryKind>,
        page: &PageRequest,
    ) -> Result<(Vec<ledger_entries::Model>, u64), DbErr> {
        let mut count_query = ledger_entries::Entity::find();
        let mut query = ledger_entries::Entity::find();

        if let Some(kind) = kind {
            count_query = count_query.filter(ledger_entries::Column::Kind.eq(kind.as_str()));
            query = query.filter(ledger_entries::Column::Kind.eq(kind.as_str()));
        }

        let total = count_query.count(&self.db).await?;

        let rows = query
            .order_by_asc(ledger_entries::Column::EntryDate)
            .order_by_asc(ledger_entries::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }
}
