//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::{Employee, Product, Repository, RepositoryProvider, Section};

use super::employee_repository::SeaOrmEmployeeRepository;
use super::product_repository::SeaOrmProductRepository;
use super::section_repository::SeaOrmSectionRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-entity repositories.
pub struct SeaOrmRepositoryProvider {
    employees: Arc<SeaOrmEmployeeRepository>,
    sections: Arc<SeaOrmSectionRepository>,
    products: Arc<SeaOrmProductRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: Arc::new(SeaOrmEmployeeRepository::new(db.clone())),
            sections: Arc::new(SeaOrmSectionRepository::new(db.clone())),
            products: Arc::new(SeaOrmProductRepository::new(db)),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn employees(&self) -> Arc<dyn Repository<Employee>> {
        self.employees.clone()
    }

    fn sections(&self) -> Arc<dyn Repository<Section>> {
        self.sections.clone()
    }

    fn products(&self) -> Arc<dyn Repository<Product>> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{DomainError, ErrorKind};
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    async fn provider() -> (SeaOrmRepositoryProvider, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");
        let config = DatabaseConfig::sqlite(path.to_str().unwrap());
        let db = init_database(&config).await.unwrap();
        (SeaOrmRepositoryProvider::new(db), dir)
    }

    fn employee(id: i32, card: &str) -> Employee {
        Employee {
            id,
            card_number_id: card.to_string(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            warehouse_id: 1,
        }
    }

    #[tokio::test]
    async fn employee_round_trip() {
        let (repos, _dir) = provider().await;
        let employees = repos.employees();

        assert_eq!(employees.last_id().await.unwrap(), 0);

        employees.create(employee(1, "AAA111222")).await.unwrap();
        employees.create(employee(4, "BBB333444")).await.unwrap();
        assert_eq!(employees.last_id().await.unwrap(), 4);

        let mut changed = employee(1, "AAA111222");
        changed.first_name = "Beatriz".into();
        let stored = employees.update(1, changed.clone()).await.unwrap();
        assert_eq!(stored, changed);
        assert_eq!(employees.get_by_id(1).await.unwrap(), changed);

        let ids: Vec<i32> = employees
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);

        employees.delete(1).await.unwrap();
        let err = employees.get_by_id(1).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Employee", 1));
    }

    #[tokio::test]
    async fn unique_index_surfaces_as_conflict() {
        let (repos, _dir) = provider().await;
        let employees = repos.employees();

        employees.create(employee(1, "AAA111222")).await.unwrap();
        let err = employees
            .create(employee(2, "AAA111222"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::conflict("Employee", "card_number_id", "AAA111222")
        );
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let (repos, _dir) = provider().await;

        let err = repos.sections().delete(9).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = repos
            .employees()
            .update(9, employee(9, "CCC555666"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn product_floats_survive_storage() {
        let (repos, _dir) = provider().await;
        let product = Product {
            id: 1,
            description: "frozen peas".into(),
            expiration_rate: 1,
            freezing_rate: 2,
            height: 3.3,
            length: 4.3,
            net_weight: 5.5,
            product_code: "PEAS-01".into(),
            recommended_freezing_temperature: -18.5,
            width: 7.7,
            product_type_id: 8,
            seller_id: 9,
        };

        repos.products().create(product.clone()).await.unwrap();

        assert_eq!(repos.products().get_by_id(1).await.unwrap(), product);
    }
}
