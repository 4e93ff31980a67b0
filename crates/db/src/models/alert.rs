//! Alert models and DTOs.

use bdsql_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `alerts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// DTO for creating a new alert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlert {
    #[serde(rename = "type")]
    pub kind: String,
}
