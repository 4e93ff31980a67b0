//! Handlers for alerts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bdsql_core::record::RecordKind;
use bdsql_db::models::alert::CreateAlert;
use bdsql_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::payload::{validated, JsonBody};
use crate::state::AppState;

/// POST /alert
///
/// Validate and store a new alert. Returns 201 with the stored row.
pub async fn create_alert(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreateAlert = validated(RecordKind::Alert, body)?;
    let alert = AlertRepo::create(&state.pool, &input).await?;

    tracing::info!(alert_id = alert.id, kind = %alert.kind, "Alert created");

    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /alerts
pub async fn list_alerts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let alerts = AlertRepo::list(&state.pool).await?;
    Ok(Json(alerts))
}
