//! Home page controller.

use axum::{response::Html, routing::get, Router};

/// Banner served at `/`.
pub const BANNER: &str = "<h1>Rollcall REST API</h1>";

/// Creates the home router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

/// Home page.
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "HTML banner", body = String, content_type = "text/html")
    )
)]
pub async fn home() -> Html<&'static str> {
    Html(BANNER)
}
