//! Handlers for personal-data records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bdsql_core::record::RecordKind;
use bdsql_db::models::personal_data::CreatePersonalData;
use bdsql_db::repositories::PersonalDataRepo;

use crate::error::AppResult;
use crate::payload::{validated, JsonBody};
use crate::state::AppState;

/// POST /personal-data
///
/// Validate and store a new personal-data record. `age` must be a
/// non-negative integer.
pub async fn create_personal_data(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreatePersonalData = validated(RecordKind::PersonalData, body)?;
    let record = PersonalDataRepo::create(&state.pool, &input).await?;

    tracing::info!(personal_data_id = record.id, "Personal data record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /personal-data
pub async fn list_personal_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = PersonalDataRepo::list(&state.pool).await?;
    Ok(Json(records))
}
