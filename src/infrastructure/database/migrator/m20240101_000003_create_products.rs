//! Create products table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Description).string().not_null())
                    .col(ColumnDef::new(Products::ExpirationRate).integer().not_null())
                    .col(ColumnDef::new(Products::FreezingRate).integer().not_null())
                    .col(ColumnDef::new(Products::Height).double().not_null())
                    .col(ColumnDef::new(Products::Length).double().not_null())
                    .col(ColumnDef::new(Products::NetWeight).double().not_null())
                    .col(
                        ColumnDef::new(Products::ProductCode)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::RecommendedFreezingTemperature)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Products::Width).double().not_null())
                    .col(ColumnDef::new(Products::ProductTypeId).integer().not_null())
                    .col(ColumnDef::new(Products::SellerId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_product_code")
                    .table(Products::Table)
                    .col(Products::ProductCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    Description,
    ExpirationRate,
    FreezingRate,
    Height,
    Length,
    NetWeight,
    ProductCode,
    RecommendedFreezingTemperature,
    Width,
    ProductTypeId,
    SellerId,
}
