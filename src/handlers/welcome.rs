use crate::routes;

/// GET /welcome handler - Static welcome message
///
/// Stateless: every call returns the same fixed text.
#[utoipa::path(
    get,
    path = routes::WELCOME,
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn welcome_handler() -> &'static str {
    "welcome to the javatechie"
}
