use axum::response::Html;

/// GET /
///
/// Static landing page.
pub async fn index() -> Html<&'static str> {
    Html(
        "<h1>Welcome to the bdsql API</h1>\
         <p>Records are served under /alerts, /personal-data, /vehicular and /cameras.</p>",
    )
}
