//! SeaORM implementation of the product repository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::debug;

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, Entity, Product, Repository};
use crate::infrastructure::database::entities::product;

fn entity_to_domain(m: product::Model) -> Product {
    Product {
        id: m.id,
        description: m.description,
        expiration_rate: m.expiration_rate,
        freezing_rate: m.freezing_rate,
        height: m.height,
        length: m.length,
        net_weight: m.net_weight,
        product_code: m.product_code,
        recommended_freezing_temperature: m.recommended_freezing_temperature,
        width: m.width,
        product_type_id: m.product_type_id,
        seller_id: m.seller_id,
    }
}

fn domain_to_active(p: &Product) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(p.id),
        description: Set(p.description.clone()),
        expiration_rate: Set(p.expiration_rate),
        freezing_rate: Set(p.freezing_rate),
        height: Set(p.height),
        length: Set(p.length),
        net_weight: Set(p.net_weight),
        product_code: Set(p.product_code.clone()),
        recommended_freezing_temperature: Set(p.recommended_freezing_temperature),
        width: Set(p.width),
        product_type_id: Set(p.product_type_id),
        seller_id: Set(p.seller_id),
    }
}

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Product> for SeaOrmProductRepository {
    async fn get_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Product> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found(Product::NAME, id))
    }

    async fn create(&self, candidate: Product) -> DomainResult<Product> {
        let model = domain_to_active(&candidate)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &candidate))?;
        debug!(id = model.id, code = %model.product_code, "Product row inserted");
        Ok(entity_to_domain(model))
    }

    async fn update(&self, id: i32, updated: Product) -> DomainResult<Product> {
        let exists = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::not_found(Product::NAME, id));
        }

        let mut model = domain_to_active(&updated);
        model.id = Set(id);
        let model = model
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, &updated))?;
        Ok(entity_to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Product::NAME, id));
        }
        Ok(())
    }

    async fn last_id(&self) -> DomainResult<i32> {
        let max: Option<Option<i32>> = product::Entity::find()
            .select_only()
            .column_as(Expr::col(product::Column::Id).max(), "max_id")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(max.flatten().unwrap_or(0))
    }
}
