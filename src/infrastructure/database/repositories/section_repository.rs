//! SeaORM implementation of the section repository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, Entity, Repository, Section};
use crate::infrastructure::database::entities::section;

fn entity_to_domain(m: section::Model) -> Section {
    Section {
        id: m.id,
        section_number: m.section_number,
        current_temperature: m.current_temperature,
        minimum_temperature: m.minimum_temperature,
        current_capacity: m.current_capacity,
        minimum_capacity: m.minimum_capacity,
        maximum_capacity: m.maximum_capacity,
        warehouse_id: m.warehouse_id,
        product_type_id: m.product_type_id,
    }
}

fn domain_to_active(s: &Section) -> section::ActiveModel {
    section::ActiveModel {
        id: Set(s.id),
        section_number: Set(s.section_number),
        current_temperature: Set(s.current_temperature),
        minimum_temperature: Set(s.minimum_temperature),
        current_capacity: Set(s.current_capacity),
        minimum_capacity: Set(s.minimum_capacity),
        maximum_capacity: Set(s.maximum_capacity),
        warehouse_id: Set(s.warehouse_id),
        product_type_id: Set(s.product_type_id),
    }
}

pub struct SeaOrmSectionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Section> for SeaOrmSectionRepository {
    async fn get_all(&self) -> DomainResult<Vec<Section>> {
        let models = section::Entity::find()
            .order_by_asc(section::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Section> {
        section::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found(Section::NAME, id))
    }

    async fn create(&self, candidate: Section) -> DomainResult<Section> {
        let model = domain_to_active(&candidate)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &candidate))?;
        Ok(entity_to_domain(model))
    }

    async fn update(&self, id: i32, updated: Section) -> DomainResult<Section> {
        let Some(existing) = section::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Err(DomainError::not_found(Section::NAME, id));
        };

        let mut model = domain_to_active(&updated);
        model.id = Set(existing.id);
        let model = model
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, &updated))?;
        Ok(entity_to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = section::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Section::NAME, id));
        }
        Ok(())
    }

    async fn last_id(&self) -> DomainResult<i32> {
        let max: Option<Option<i32>> = section::Entity::find()
            .select_only()
            .column_as(Expr::col(section::Column::Id).max(), "max_id")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(max.flatten().unwrap_or(0))
    }
}
