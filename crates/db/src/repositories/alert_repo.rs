//! Repository for the `alerts` table.

use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert};

/// Column list for `alerts` queries.
const COLUMNS: &str = "id, type";

/// Provides data access for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new alert, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!("INSERT INTO alerts (type) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Alert>(&query)
            .bind(&dto.kind)
            .fetch_one(pool)
            .await
    }

    /// List every alert in natural table order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts");
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }
}
