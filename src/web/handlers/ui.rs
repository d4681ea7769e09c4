//! UI entry page.
//!
//! The page is a static consumer of the JSON API; no server-side
//! templating is involved.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// `GET /` — serve the embedded single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
