use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::bag::domain::BagDto;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/bags", tag = "bags",
    responses((status = 200, description = "List OK", body = [crate::openapi::BagDtoDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BagDto>>, JsonApiError> {
    Ok(Json(state.bags.get_all().await?))
}

#[utoipa::path(
    post, path = "/bags", tag = "bags",
    request_body = crate::openapi::BagDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BagDtoDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<BagDto>) -> Result<(StatusCode, Json<BagDto>), JsonApiError> {
    let created = state.bags.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/bags/{id}", tag = "bags",
    params(("id" = i64, Path, description = "Bag ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BagDtoDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<BagDto>, JsonApiError> {
    Ok(Json(state.bags.get(id).await?))
}
