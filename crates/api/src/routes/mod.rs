pub mod health;
pub mod records;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                 welcome page
/// /health           service and database health
/// /alert, /alerts   alerts
/// /personal-data    personal-data records
/// /vehicular        vehicular incidents
/// /camera, /cameras cameras
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::welcome::index))
        .merge(health::router())
        .merge(records::router())
}
