//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateProduct, Product, ProductPatch};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub description: String,
    pub expiration_rate: i32,
    pub freezing_rate: i32,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub product_code: String,
    pub recommended_freezing_temperature: f64,
    pub width: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            description: p.description,
            expiration_rate: p.expiration_rate,
            freezing_rate: p.freezing_rate,
            height: p.height,
            length: p.length,
            net_weight: p.net_weight,
            product_code: p.product_code,
            recommended_freezing_temperature: p.recommended_freezing_temperature,
            width: p.width,
            product_type_id: p.product_type_id,
            seller_id: p.seller_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub expiration_rate: i32,
    pub freezing_rate: i32,
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height: f64,
    #[validate(range(exclusive_min = 0.0, message = "length must be positive"))]
    pub length: f64,
    #[validate(range(exclusive_min = 0.0, message = "net_weight must be positive"))]
    pub net_weight: f64,
    #[validate(length(min = 1, message = "product_code is required"))]
    pub product_code: String,
    pub recommended_freezing_temperature: f64,
    #[validate(range(exclusive_min = 0.0, message = "width must be positive"))]
    pub width: f64,
    #[validate(range(min = 1, message = "product_type_id is required"))]
    pub product_type_id: i32,
    #[validate(range(min = 1, message = "seller_id is required"))]
    pub seller_id: i32,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            description: r.description,
            expiration_rate: r.expiration_rate,
            freezing_rate: r.freezing_rate,
            height: r.height,
            length: r.length,
            net_weight: r.net_weight,
            product_code: r.product_code,
            recommended_freezing_temperature: r.recommended_freezing_temperature,
            width: r.width,
            product_type_id: r.product_type_id,
            seller_id: r.seller_id,
        }
    }
}

/// Partial update. Omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    pub expiration_rate: Option<i32>,
    pub freezing_rate: Option<i32>,
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "length must be positive"))]
    pub length: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "net_weight must be positive"))]
    pub net_weight: Option<f64>,
    #[validate(length(min = 1, message = "product_code must not be empty"))]
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "width must be positive"))]
    pub width: Option<f64>,
    #[validate(range(min = 1, message = "product_type_id must be positive"))]
    pub product_type_id: Option<i32>,
    #[validate(range(min = 1, message = "seller_id must be positive"))]
    pub seller_id: Option<i32>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(r: UpdateProductRequest) -> Self {
        Self {
            description: r.description,
            expiration_rate: r.expiration_rate,
            freezing_rate: r.freezing_rate,
            height: r.height,
            length: r.length,
            net_weight: r.net_weight,
            product_code: r.product_code,
            recommended_freezing_temperature: r.recommended_freezing_temperature,
            width: r.width,
            product_type_id: r.product_type_id,
            seller_id: r.seller_id,
        }
    }
}
