//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::application::inventory::ProductService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, IdPath, ValidatedJson,
};

#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "Product list", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, ApiError> {
    let products = state.service.get_all().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        products.into_iter().map(ProductResponse::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let product = state.service.get_by_id(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ProductResponse>),
        (status = 409, description = "product_code already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), ApiError> {
    let product = state.service.create(req.into()).await.map_err(error_response)?;
    info!(id = product.id, code = %product.product_code, "Product registered");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product.into()))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "product_code already registered")
    )
)]
pub async fn update_product(
    State(state): State<ProductState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let product = state
        .service
        .update(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await.map_err(error_response)?;
    info!(id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
