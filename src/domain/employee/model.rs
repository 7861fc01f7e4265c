//! Employee domain entity

use crate::domain::entity::Entity;

/// Warehouse employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    /// Badge number, unique across all employees
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

impl Entity for Employee {
    type Create = CreateEmployee;
    type Patch = EmployeePatch;
    type Key = String;

    const NAME: &'static str = "Employee";
    const UNIQUE_FIELD: &'static str = "card_number_id";

    fn id(&self) -> i32 {
        self.id
    }

    fn unique_key(&self) -> &String {
        &self.card_number_id
    }

    fn create_key(request: &CreateEmployee) -> &String {
        &request.card_number_id
    }

    fn patch_key(patch: &EmployeePatch) -> Option<&String> {
        patch.card_number_id.as_ref()
    }

    fn from_create(id: i32, request: CreateEmployee) -> Self {
        Self {
            id,
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
            warehouse_id: request.warehouse_id,
        }
    }

    fn merge(&mut self, patch: EmployeePatch) {
        if let Some(card_number_id) = patch.card_number_id {
            self.card_number_id = card_number_id;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(warehouse_id) = patch.warehouse_id {
            self.warehouse_id = warehouse_id;
        }
    }
}
