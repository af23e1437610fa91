use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{Product, ProductInput};
use serde::Serialize;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const PRODUCT_CREATED: &str = "Product created successfully";

#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub message: &'static str,
    pub product: Product,
}

#[utoipa::path(
    post, path = "/artisans/{id}/products", tag = "products",
    params(("id" = String, Path, description = "Owning artisan ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductCreatedDoc),
        (status = 404, description = "Artisan Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_product(
    State(state): State<ServerState>,
    Path(artisan_id): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductCreated>), JsonApiError> {
    let Json(input) = payload?;
    let product = state.catalog.create_product(&artisan_id, input).await?;
    Ok((StatusCode::CREATED, Json(ProductCreated { message: PRODUCT_CREATED, product })))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses((status = 200, description = "Products of every artisan", body = [crate::openapi::ProductDoc]))
)]
pub async fn list_products(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_products().await)
}

#[utoipa::path(
    get, path = "/artisans/{id}/products", tag = "products",
    params(("id" = String, Path, description = "Artisan ID")),
    responses(
        (status = 200, description = "Products of the artisan", body = [crate::openapi::ProductDoc]),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list_artisan_products(
    State(state): State<ServerState>,
    Path(artisan_id): Path<String>,
) -> Result<Json<Vec<Product>>, JsonApiError> {
    Ok(Json(state.catalog.list_artisan_products(&artisan_id).await?))
}
