//! `{id}` path extractor answering rejections with the `ApiResponse` envelope.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ApiResponse;

/// Integer record id taken from the route's single path parameter.
pub struct IdPath(pub i32);

pub struct IdRejection(PathRejection);

impl IntoResponse for IdRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(format!("Invalid id: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = IdRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(IdRejection)?;
        Ok(IdPath(id))
    }
}
