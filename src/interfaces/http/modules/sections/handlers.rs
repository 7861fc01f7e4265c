//! Section REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CreateSectionRequest, SectionResponse, UpdateSectionRequest};
use crate::application::inventory::SectionService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, IdPath, ValidatedJson,
};

#[derive(Clone)]
pub struct SectionState {
    pub service: Arc<SectionService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "Sections",
    responses(
        (status = 200, description = "Section list", body = ApiResponse<Vec<SectionResponse>>)
    )
)]
pub async fn list_sections(
    State(state): State<SectionState>,
) -> Result<Json<ApiResponse<Vec<SectionResponse>>>, ApiError> {
    let sections = state.service.get_all().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        sections.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section details", body = ApiResponse<SectionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_section(
    State(state): State<SectionState>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    match state.service.get_by_id(id).await {
        Ok(section) => Ok(Json(ApiResponse::success(section.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    tag = "Sections",
    request_body = CreateSectionRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<SectionResponse>),
        (status = 409, description = "section_number already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_section(
    State(state): State<SectionState>,
    ValidatedJson(req): ValidatedJson<CreateSectionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SectionResponse>>), ApiError> {
    match state.service.create(req.into()).await {
        Ok(section) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(section.into())),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = i32, Path, description = "Section ID")),
    request_body = UpdateSectionRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<SectionResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "section_number already registered")
    )
)]
pub async fn update_section(
    State(state): State<SectionState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateSectionRequest>,
) -> Result<Json<ApiResponse<SectionResponse>>, ApiError> {
    match state.service.update(id, req.into()).await {
        Ok(section) => Ok(Json(ApiResponse::success(section.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/sections/{id}",
    tag = "Sections",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_section(
    State(state): State<SectionState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    match state.service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}
