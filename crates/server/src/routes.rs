use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use common::types::{Health, ServiceStatus};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod artisans;
pub mod products;

/// Every route served, as `(method, path, summary)`; logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "service status"),
    ("GET", "/health", "liveness"),
    ("GET", "/openapi.json", "OpenAPI document"),
    ("GET", "/docs", "Swagger UI"),
    ("GET", "/redoc", "ReDoc"),
    ("POST", "/artisans", "create artisan"),
    ("GET", "/artisans", "list artisans"),
    ("GET", "/artisans/{id}", "get artisan by id"),
    ("POST", "/artisans/{id}/products", "create product for artisan"),
    ("GET", "/artisans/{id}/products", "list products for artisan"),
    ("GET", "/products", "list all products"),
];

#[utoipa::path(
    get, path = "/", tag = "system",
    responses((status = 200, description = "Service status", body = crate::openapi::ServiceStatusDoc))
)]
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus::online(common::SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

#[utoipa::path(
    get, path = "/health", tag = "system",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthDoc))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Bodies sent without a `Content-Type` are read as JSON.
pub async fn default_json_content_type(mut req: Request, next: Next) -> Response {
    if !req.headers().contains_key(CONTENT_TYPE) {
        req.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    next.run(req).await
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let system = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()));

    let catalog = Router::new()
        .route("/artisans", get(artisans::list_artisans).post(artisans::create_artisan))
        .route("/artisans/:id", get(artisans::get_artisan))
        .route(
            "/artisans/:id/products",
            get(products::list_artisan_products).post(products::create_product),
        )
        .route("/products", get(products::list_products))
        .route_layer(middleware::from_fn(default_json_content_type));

    system
        .merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
