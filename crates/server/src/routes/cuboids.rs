use axum::{extract::{Path, State}, http::StatusCode, response::{IntoResponse, Response}, Json};
use service::cuboid::domain::CuboidDto;
use service::errors::ServiceError;
use tracing::{info, error};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/cuboids", tag = "cuboids",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CuboidDtoDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CuboidDto>>, JsonApiError> {
    let list = state.cuboids.get_all().await?;
    info!(count = list.len(), "list cuboids");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/cuboids", tag = "cuboids",
    request_body = crate::openapi::CuboidDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CuboidDtoDoc),
        (status = 404, description = "Bag not found"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CuboidDto>) -> Result<(StatusCode, Json<CuboidDto>), JsonApiError> {
    info!(bag_id = input.bag_id, width = input.width, height = input.height, depth = input.depth, "cuboid_create_request");
    let created = state.cuboids.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/cuboids/{id}", tag = "cuboids",
    params(("id" = i64, Path, description = "Cuboid ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CuboidDtoDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<CuboidDto>, JsonApiError> {
    Ok(Json(state.cuboids.get(id).await?))
}

/// A missing cuboid or bag answers 404 with an empty body.
#[utoipa::path(
    put, path = "/cuboids/{id}", tag = "cuboids",
    params(("id" = i64, Path, description = "Cuboid ID")),
    request_body = crate::openapi::CuboidDtoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CuboidDtoDoc),
        (status = 404, description = "Cuboid or bag not found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(input): Json<CuboidDto>) -> Result<Json<CuboidDto>, Response> {
    // the path id wins over any id in the body
    let dto = CuboidDto { id: Some(id), ..input };
    match state.cuboids.update(dto).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) if e.is_not_found() => {
            info!(id, err = %e, "update target missing");
            Err(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => Err(JsonApiError::from(e).into_response()),
    }
}

#[utoipa::path(
    delete, path = "/cuboids/{id}", tag = "cuboids",
    params(("id" = i64, Path, description = "Cuboid ID")),
    responses(
        (status = 200, description = "Deleted:<id>", body = String),
        (status = 404, description = "Cuboid not exists:<id>", body = String),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> (StatusCode, String) {
    match state.cuboids.delete(id).await {
        Ok(msg) => (StatusCode::OK, msg),
        Err(e @ ServiceError::CuboidNotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => { error!(err = %e, "delete cuboid failed"); (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()) },
    }
}
