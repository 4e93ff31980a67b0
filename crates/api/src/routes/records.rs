//! Route definitions for the four record types.
//!
//! Create and list paths differ in number for alerts and cameras, so each
//! record type contributes its own pair of routes:
//!
//! ```text
//! POST /alert            -> create_alert
//! GET  /alerts           -> list_alerts
//! POST /personal-data    -> create_personal_data
//! GET  /personal-data    -> list_personal_data
//! POST /vehicular        -> create_vehicular_incident
//! GET  /vehicular        -> list_vehicular_incidents
//! POST /camera           -> create_camera
//! GET  /cameras          -> list_cameras
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{alert, camera, personal_data, vehicular};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alert", post(alert::create_alert))
        .route("/alerts", get(alert::list_alerts))
        .route(
            "/personal-data",
            get(personal_data::list_personal_data).post(personal_data::create_personal_data),
        )
        .route(
            "/vehicular",
            get(vehicular::list_vehicular_incidents).post(vehicular::create_vehicular_incident),
        )
        .route("/camera", post(camera::create_camera))
        .route("/cameras", get(camera::list_cameras))
}
