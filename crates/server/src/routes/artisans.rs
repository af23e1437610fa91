use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{Artisan, ArtisanInput};
use serde::Serialize;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const ARTISAN_CREATED: &str = "Artisan created successfully";

#[derive(Debug, Serialize)]
pub struct ArtisanCreated {
    pub message: &'static str,
    pub artisan: Artisan,
}

#[utoipa::path(
    post, path = "/artisans", tag = "artisans",
    request_body = crate::openapi::ArtisanInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ArtisanCreatedDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_artisan(
    State(state): State<ServerState>,
    payload: Result<Json<ArtisanInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ArtisanCreated>), JsonApiError> {
    let Json(input) = payload?;
    let artisan = state.catalog.create_artisan(input).await?;
    Ok((StatusCode::CREATED, Json(ArtisanCreated { message: ARTISAN_CREATED, artisan })))
}

#[utoipa::path(
    get, path = "/artisans", tag = "artisans",
    responses((status = 200, description = "All artisans", body = [crate::openapi::ArtisanDoc]))
)]
pub async fn list_artisans(State(state): State<ServerState>) -> Json<Vec<Artisan>> {
    Json(state.catalog.list_artisans().await)
}

#[utoipa::path(
    get, path = "/artisans/{id}", tag = "artisans",
    params(("id" = String, Path, description = "Artisan ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ArtisanDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_artisan(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Artisan>, JsonApiError> {
    Ok(Json(state.catalog.get_artisan(&id).await?))
}
