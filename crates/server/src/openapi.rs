use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String }

#[derive(ToSchema)]
pub struct ServiceStatusDoc { pub message: String, pub version: String, pub status: String }

#[derive(ToSchema)]
pub struct ArtisanDoc { pub id: String, pub name: String, pub craft_type: String }

/// `id` is generated when omitted.
#[derive(ToSchema)]
pub struct ArtisanInputDoc { pub id: Option<String>, pub name: String, pub craft_type: String }

#[derive(ToSchema)]
pub struct ArtisanCreatedDoc { pub message: String, pub artisan: ArtisanDoc }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u64,
    pub artisan_id: String,
}

/// `price` must be > 0 and `stock_quantity` >= 0.
#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
}

#[derive(ToSchema)]
pub struct ProductCreatedDoc { pub message: String, pub product: ProductDoc }

#[derive(ToSchema)]
pub struct FieldViolationDoc { pub field: String, pub message: String }

/// `detail` is only present on 422 responses.
#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    pub status_code: u16,
    pub timestamp: String,
    pub detail: Option<Vec<FieldViolationDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Artisan Marketplace API",
        description = "Artisans and the products they sell, kept in process memory"
    ),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::artisans::create_artisan,
        crate::routes::artisans::list_artisans,
        crate::routes::artisans::get_artisan,
        crate::routes::products::create_product,
        crate::routes::products::list_products,
        crate::routes::products::list_artisan_products,
    ),
    components(
        schemas(
            HealthDoc,
            ServiceStatusDoc,
            ArtisanDoc,
            ArtisanInputDoc,
            ArtisanCreatedDoc,
            ProductDoc,
            ProductInputDoc,
            ProductCreatedDoc,
            FieldViolationDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "system"),
        (name = "artisans"),
        (name = "products")
    )
)]
pub struct ApiDoc;
