//! Product entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub description: String,

    pub expiration_rate: i32,

    pub freezing_rate: i32,

    pub height: f64,

    pub length: f64,

    pub net_weight: f64,

    /// Catalog code (unique)
    #[sea_orm(unique)]
    pub product_code: String,

    pub recommended_freezing_temperature: f64,

    pub width: f64,

    pub product_type_id: i32,

    pub seller_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
