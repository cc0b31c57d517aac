use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{get_message_handler, health_handler, welcome_handler};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const WELCOME: &str = "/welcome";
pub const GET_MESSAGE: &str = "/get";
pub const HEALTH: &str = "/health";

/// Build the routing table. Registered once at startup and immutable afterwards.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(WELCOME, get(welcome_handler))
        .route(GET_MESSAGE, get(get_message_handler))
        .route(HEALTH, get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
