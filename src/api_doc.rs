use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "greeting-api",
        version = "1.0.0",
        description = "A minimal web service serving two static greeting endpoints"
    ),
    paths(
        handlers::health::health_handler,
        handlers::welcome::welcome_handler,
        handlers::get_message::get_message_handler
    ),
    components(schemas(HealthResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "greeting", description = "Static greeting endpoints")
    )
)]
pub struct ApiDoc;
