//! SeaORM implementation of the employee repository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

use super::{db_err, write_err};
use crate::domain::{DomainError, DomainResult, Employee, Entity, Repository};
use crate::infrastructure::database::entities::employee;

fn entity_to_domain(m: employee::Model) -> Employee {
    Employee {
        id: m.id,
        card_number_id: m.card_number_id,
        first_name: m.first_name,
        last_name: m.last_name,
        warehouse_id: m.warehouse_id,
    }
}

fn domain_to_active(e: &Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        id: Set(e.id),
        card_number_id: Set(e.card_number_id.clone()),
        first_name: Set(e.first_name.clone()),
        last_name: Set(e.last_name.clone()),
        warehouse_id: Set(e.warehouse_id),
    }
}

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Employee> for SeaOrmEmployeeRepository {
    async fn get_all(&self) -> DomainResult<Vec<Employee>> {
        let models = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Employee> {
        employee::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found(Employee::NAME, id))
    }

    async fn create(&self, candidate: Employee) -> DomainResult<Employee> {
        let model = domain_to_active(&candidate)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &candidate))?;
        Ok(entity_to_domain(model))
    }

    async fn update(&self, id: i32, updated: Employee) -> DomainResult<Employee> {
        let exists = employee::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::not_found(Employee::NAME, id));
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
        let result = employee::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Employee::NAME, id));
        }
        Ok(())
    }

    async fn last_id(&self) -> DomainResult<i32> {
        let max: Option<Option<i32>> = employee::Entity::find()
            .select_only()
            .column_as(Expr::col(employee::Column::Id).max(), "max_id")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(max.flatten().unwrap_or(0))
    }
}
