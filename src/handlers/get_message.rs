use crate::routes;

/// GET /get handler - Static greeting message
#[utoipa::path(
    get,
    path = routes::GET_MESSAGE,
    responses(
        (status = 200, description = "Greeting message", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn get_message_handler() -> &'static str {
    "welcome to the java world"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_message_endpoint() {
        let app = Router::new().route(crate::routes::GET_MESSAGE, get(get_message_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/get")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"welcome to the java world");
    }
}
