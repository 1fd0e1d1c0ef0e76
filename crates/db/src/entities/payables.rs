//! `SeaORM` Entity for payables table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    pub due_date: Date,
    /// Settlement status stored as a lowercase string; decoded by the
    /// repositories into `SettlementStatus`.
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
