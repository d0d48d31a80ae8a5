use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "STOQR API",
        version = "0.1.0",
        description = "Inventory items: desired and actual stock levels, and stock withdrawal"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc),
    ),
)]
pub struct ApiDoc;
