//! Section DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateSection, Section, SectionPatch};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
    pub id: i32,
    pub section_number: i32,
    pub current_temperature: i32,
    pub minimum_temperature: i32,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

impl From<Section> for SectionResponse {
    fn from(s: Section) -> Self {
        Self {
            id: s.id,
            section_number: s.section_number,
            current_temperature: s.current_temperature,
            minimum_temperature: s.minimum_temperature,
            current_capacity: s.current_capacity,
            minimum_capacity: s.minimum_capacity,
            maximum_capacity: s.maximum_capacity,
            warehouse_id: s.warehouse_id,
            product_type_id: s.product_type_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSectionRequest {
    #[validate(range(min = 1, message = "section_number must be positive"))]
    pub section_number: i32,
    pub current_temperature: i32,
    pub minimum_temperature: i32,
    #[validate(range(min = 0, message = "current_capacity must be non-negative"))]
    pub current_capacity: i32,
    #[validate(range(min = 0, message = "minimum_capacity must be non-negative"))]
    pub minimum_capacity: i32,
    #[validate(range(min = 0, message = "maximum_capacity must be non-negative"))]
    pub maximum_capacity: i32,
    #[validate(range(min = 1, message = "warehouse_id is required"))]
    pub warehouse_id: i32,
    #[validate(range(min = 1, message = "product_type_id is required"))]
    pub product_type_id: i32,
}

impl From<CreateSectionRequest> for CreateSection {
    fn from(r: CreateSectionRequest) -> Self {
        Self {
            section_number: r.section_number,
            current_temperature: r.current_temperature,
            minimum_temperature: r.minimum_temperature,
            current_capacity: r.current_capacity,
            minimum_capacity: r.minimum_capacity,
            maximum_capacity: r.maximum_capacity,
            warehouse_id: r.warehouse_id,
            product_type_id: r.product_type_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSectionRequest {
    #[validate(range(min = 1, message = "section_number must be positive"))]
    pub section_number: Option<i32>,
    pub current_temperature: Option<i32>,
    pub minimum_temperature: Option<i32>,
    #[validate(range(min = 0, message = "current_capacity must be non-negative"))]
    pub current_capacity: Option<i32>,
    #[validate(range(min = 0, message = "minimum_capacity must be non-negative"))]
    pub minimum_capacity: Option<i32>,
    #[validate(range(min = 0, message = "maximum_capacity must be non-negative"))]
    pub maximum_capacity: Option<i32>,
    #[validate(range(min = 1, message = "warehouse_id must be positive"))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1, message = "product_type_id must be positive"))]
    pub product_type_id: Option<i32>,
}

impl From<UpdateSectionRequest> for SectionPatch {
    fn from(r: UpdateSectionRequest) -> Self {
        Self {
            section_number: r.section_number,
            current_temperature: r.current_temperature,
            minimum_temperature: r.minimum_temperature,
            current_capacity: r.current_capacity,
            minimum_capacity: r.minimum_capacity,
            maximum_capacity: r.maximum_capacity,
            warehouse_id: r.warehouse_id,
            product_type_id: r.product_type_id,
        }
    }
}
