//! Employee entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Assigned by the inventory service, never by the database
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Badge number (unique)
    #[sea_orm(unique)]
    pub card_number_id: String,

    pub first_name: String,

    pub last_name: String,

    pub warehouse_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
