//! Vehicular incident models and DTOs.
//!
//! `date` is stored exactly as submitted; it is never parsed.

use bdsql_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vehicular_incidents` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VehicularIncident {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub plates: String,
}

/// DTO for creating a new vehicular incident.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicularIncident {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub plates: String,
}
