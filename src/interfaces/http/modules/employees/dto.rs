//! Employee DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateEmployee, Employee, EmployeePatch};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            card_number_id: e.card_number_id,
            first_name: e.first_name,
            last_name: e.last_name,
            warehouse_id: e.warehouse_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(equal = 9, message = "card_number_id must have 9 characters"))]
    pub card_number_id: String,
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(range(min = 1, message = "warehouse_id is required"))]
    pub warehouse_id: i32,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(r: CreateEmployeeRequest) -> Self {
        Self {
            card_number_id: r.card_number_id,
            first_name: r.first_name,
            last_name: r.last_name,
            warehouse_id: r.warehouse_id,
        }
    }
}

/// Partial update. Omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeRequest {
    #[validate(length(equal = 9, message = "card_number_id must have 9 characters"))]
    pub card_number_id: Option<String>,
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(range(min = 1, message = "warehouse_id must be positive"))]
    pub warehouse_id: Option<i32>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(r: UpdateEmployeeRequest) -> Self {
        Self {
            card_number_id: r.card_number_id,
            first_name: r.first_name,
            last_name: r.last_name,
            warehouse_id: r.warehouse_id,
        }
    }
}
