//! Payable repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use finboard_core::domain::SettlementStatus;
use finboard_shared::types::PageRequest;

use crate::entities::payables;

/// Payable repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PayableRepository {
    db: DatabaseConnection,
}

impl PayableRepository {
    /// Creates a new payable repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new payable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        supplier: &str,
        amount: Decimal,
        due_date: NaiveDate,
        status: SettlementStatus,
    ) -> Result<payables::Model, DbErr> {
        let payable = payables::ActiveModel {
            supplier: Set(supplier.to_owned()),
            amount: Set(amount),
            due_date: Set(due_date),
            status: Set(status.as_str().to_owned()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        payable.insert(&self.db).await
    }

    /// Finds a payable by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<payables::Model>, DbErr> {
        payables::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists payables ordered by due date, optionally filtered by status,
    /// with the total row count for the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        status: Option<SettlementStatus>,
        page: &PageRequest,
    ) -> Result<(Vec<payables::Model>, u64), DbErr> {
        let mut count_query = payables::Entity::find();
        let mut query = payables::Entity::find();

        if let Some(status) = status {
            count_query = count_query.filter(payables::Column::Status.eq(status.as_str()));
            query = query.filter(payables::Column::Status.eq(status.as_str()));
        }

        let total = count_query.count(&self.db).await?;

        let rows = query
            .order_by_asc(payables::Column::DueDate)
            .order_by_asc(payables::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }
}
