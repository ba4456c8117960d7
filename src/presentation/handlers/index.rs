use axum::response::Html;

/// Serves the embedded upload page.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
