//! Section entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(unique)]
    pub section_number: i32,

    /// Degrees Celsius
    pub current_temperature: i32,
    pub minimum_temperature: i32,

    /// Product units
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,

    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
