//! Handlers for vehicular incidents.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bdsql_core::record::RecordKind;
use bdsql_db::models::vehicular_incident::CreateVehicularIncident;
use bdsql_db::repositories::VehicularIncidentRepo;

use crate::error::AppResult;
use crate::payload::{validated, JsonBody};
use crate::state::AppState;

/// POST /vehicular
pub async fn create_vehicular_incident(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreateVehicularIncident = validated(RecordKind::VehicularIncident, body)?;
    let incident = VehicularIncidentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        incident_id = incident.id,
        kind = %incident.kind,
        location = %incident.location,
        "Vehicular incident created",
    );

    Ok((StatusCode::CREATED, Json(incident)))
}

/// GET /vehicular
pub async fn list_vehicular_incidents(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let incidents = VehicularIncidentRepo::list(&state.pool).await?;
    Ok(Json(incidents))
}
