//! Repository for the `personal_data` table.

use sqlx::PgPool;

use crate::models::personal_data::{CreatePersonalData, PersonalData};

/// Column list for `personal_data` queries.
const COLUMNS: &str = "id, age, sex, emotion";

/// Provides data access for personal-data records.
pub struct PersonalDataRepo;

impl PersonalDataRepo {
    /// Insert a new personal-data record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreatePersonalData,
    ) -> Result<PersonalData, sqlx::Error> {
        let query = format!(
            "INSERT INTO personal_data (age, sex, emotion) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonalData>(&query)
            .bind(dto.age)
            .bind(&dto.sex)
            .bind(&dto.emotion)
            .fetch_one(pool)
            .await
    }

    /// List every personal-data record in natural table order.
    pub async fn list(pool: &PgPool) -> Result<Vec<PersonalData>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personal_data");
        sqlx::query_as::<_, PersonalData>(&query)
            .fetch_all(pool)
            .await
    }
}
