//! Handlers for cameras.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bdsql_core::record::RecordKind;
use bdsql_db::models::camera::CreateCamera;
use bdsql_db::repositories::CameraRepo;

use crate::error::AppResult;
use crate::payload::{validated, JsonBody};
use crate::state::AppState;

/// POST /camera
///
/// Validate and store a new camera. Returns 201 with the stored row.
pub async fn create_camera(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreateCamera = validated(RecordKind::Camera, body)?;
    let camera = CameraRepo::create(&state.pool, &input).await?;

    tracing::info!(
        camera_id = camera.id,
        number = %camera.number,
        "Camera created",
    );

    Ok((StatusCode::CREATED, Json(camera)))
}

/// GET /cameras
pub async fn list_cameras(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cameras = CameraRepo::list(&state.pool).await?;
    Ok(Json(cameras))
}
