//! Product domain entity

use crate::domain::entity::Entity;

/// Product catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub description: String,
    pub expiration_rate: i32,
    pub freezing_rate: i32,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    /// Catalog code, unique across all products (case-sensitive)
    pub product_code: String,
    pub recommended_freezing_temperature: f64,
    pub width: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
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

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub description: Option<String>,
    pub expiration_rate: Option<i32>,
    pub freezing_rate: Option<i32>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f64>,
    pub width: Option<f64>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl Entity for Product {
    type Create = CreateProduct;
    type Patch = ProductPatch;
    type Key = String;

    const NAME: &'static str = "Product";
    const UNIQUE_FIELD: &'static str = "product_code";

    fn id(&self) -> i32 {
        self.id
    }

    fn unique_key(&self) -> &String {
        &self.product_code
    }

    fn create_key(request: &CreateProduct) -> &String {
        &request.product_code
    }

    fn patch_key(patch: &ProductPatch) -> Option<&String> {
        patch.product_code.as_ref()
    }

    fn from_create(id: i32, r: CreateProduct) -> Self {
        Self {
            id,
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

    fn merge(&mut self, p: ProductPatch) {
        let ProductPatch {
            description,
            expiration_rate,
            freezing_rate,
            height,
            length,
            net_weight,
            product_code,
            recommended_freezing_temperature,
            width,
            product_type_id,
            seller_id,
        } = p;

        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = expiration_rate {
            self.expiration_rate = v;
        }
        if let Some(v) = freezing_rate {
            self.freezing_rate = v;
        }
        if let Some(v) = height {
            self.height = v;
        }
        if let Some(v) = length {
            self.length = v;
        }
        if let Some(v) = net_weight {
            self.net_weight = v;
        }
        if let Some(v) = product_code {
            self.product_code = v;
        }
        if let Some(v) = recommended_freezing_temperature {
            self.recommended_freezing_temperature = v;
        }
        if let Some(v) = width {
            self.width = v;
        }
        if let Some(v) = product_type_id {
            self.product_type_id = v;
        }
        if let Some(v) = seller_id {
            self.seller_id = v;
        }
    }
}
