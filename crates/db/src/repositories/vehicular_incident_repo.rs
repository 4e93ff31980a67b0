//! Repository for the `vehicular_incidents` table.

use sqlx::PgPool;

use crate::models::vehicular_incident::{CreateVehicularIncident, VehicularIncident};

/// Column list for `vehicular_incidents` queries.
const COLUMNS: &str = "id, type, description, date, location, plates";

/// Provides data access for vehicular incidents.
pub struct VehicularIncidentRepo;

impl VehicularIncidentRepo {
    /// Insert a new vehicular incident, returning the created row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateVehicularIncident,
    ) -> Result<VehicularIncident, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicular_incidents (type, description, date, location, plates) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VehicularIncident>(&query)
            .bind(&dto.kind)
            .bind(&dto.description)
            .bind(&dto.date)
            .bind(&dto.location)
            .bind(&dto.plates)
            .fetch_one(pool)
            .await
    }

    /// List every vehicular incident in natural table order.
    pub async fn list(pool: &PgPool) -> Result<Vec<VehicularIncident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicular_incidents");
        sqlx::query_as::<_, VehicularIncident>(&query)
            .fetch_all(pool)
            .await
    }
}
