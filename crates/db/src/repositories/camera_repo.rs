//! Repository for the `cameras` table.

use sqlx::PgPool;

use crate::models::camera::{Camera, CreateCamera};

/// Column list for `cameras` queries.
const COLUMNS: &str = "id, number, address, type, location, resolution";

/// Provides data access for cameras.
pub struct CameraRepo;

impl CameraRepo {
    /// Insert a new camera, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateCamera) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "INSERT INTO cameras (number, address, type, location, resolution) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(&dto.number)
            .bind(&dto.address)
            .bind(&dto.kind)
            .bind(&dto.location)
            .bind(&dto.resolution)
            .fetch_one(pool)
            .await
    }

    /// List every camera in natural table order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras");
        sqlx::query_as::<_, Camera>(&query).fetch_all(pool).await
    }
}
