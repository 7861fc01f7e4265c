//! Employee REST API handlers
//!
//! Thin wrappers delegating to `EmployeeService`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::application::inventory::EmployeeService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, IdPath, ValidatedJson,
};

#[derive(Clone)]
pub struct EmployeeState {
    pub service: Arc<EmployeeService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "Employee list", body = ApiResponse<Vec<EmployeeResponse>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_employees(
    State(state): State<EmployeeState>,
) -> Result<Json<ApiResponse<Vec<EmployeeResponse>>>, ApiError> {
    let employees = state.service.get_all().await.map_err(error_response)?;
    let items = employees.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_employee(
    State(state): State<EmployeeState>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<EmployeeResponse>>, ApiError> {
    let employee = state.service.get_by_id(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(employee.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "card_number_id already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_employee(
    State(state): State<EmployeeState>,
    ValidatedJson(req): ValidatedJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EmployeeResponse>>), ApiError> {
    let created = state
        .service
        .create(req.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<EmployeeResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "card_number_id already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_employee(
    State(state): State<EmployeeState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, ApiError> {
    let updated = state
        .service
        .update(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_employee(
    State(state): State<EmployeeState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
