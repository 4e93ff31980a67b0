//! Camera models and DTOs.

use bdsql_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cameras` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Camera {
    pub id: DbId,
    pub number: String,
    pub address: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub resolution: String,
}

/// DTO for creating a new camera.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCamera {
    pub number: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub resolution: String,
}
