//! Receivable repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use finboard_core::domain::SettlementStatus;
use finboard_shared::types::PageRequest;

use crate::entities::receivables;

/// Receivable repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ReceivableRepository {
    db: DatabaseConnection,
}

impl ReceivableRepository {
    /// Creates a new receivable repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new receivable.
    ///
    /// The referenced client must exist; the foreign key rejects the insert
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        client_id: i32,
        amount: Decimal,
        due_date: NaiveDate,
        status: SettlementStatus,
    ) -> Result<receivables::Model, DbErr> {
        let receivable = receivables::ActiveModel {
            client_id: Set(client_id),
            amount: Set(amount),
            due_date: Set(due_date),
            status: Set(status.as_str().to_owned()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        receivable.insert(&self.db).await
    }

    /// Finds a receivable by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<receivables::Model>, DbErr> {
        receivables::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists receivables ordered by due date, optionally filtered by status,
    /// with the total row count for the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        status: Option<SettlementStatus>,
        page: &PageRequest,
    ) -> Result<(Vec<receivables::Model>, u64), DbErr> {
        let mut count_query = receivables::Entity::find();
        let mut query = receivables::Entity::find();

        if let Some(status) = status {
            count_query = count_query.filter(receivables::Column::Status.eq(status.as_str()));
            query = query.filter(receivables::Column::Status.eq(status.as_str()));
        }

        let total = count_query.count(&self.db).await?;

        let rows = query
            .order_by_asc(receivables::Column::DueDate)
            .order_by_asc(receivables::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }
}
