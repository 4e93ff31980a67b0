//! Idempotent table bootstrap run at process start.
//!
//! Tables are only ever created, never altered or dropped, so running the
//! bootstrap against a populated database leaves existing rows untouched.

use bdsql_core::record::RecordKind;

use crate::DbPool;

/// Name of the table that stores records of `kind`.
pub fn table_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Alert => "alerts",
        RecordKind::PersonalData => "personal_data",
        RecordKind::VehicularIncident => "vehicular_incidents",
        RecordKind::Camera => "cameras",
    }
}

fn create_table_sql(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Alert => {
            "CREATE TABLE IF NOT EXISTS alerts (
                id BIGSERIAL PRIMARY KEY,
                type TEXT NOT NULL
            )"
        }
        RecordKind::PersonalData => {
            "CREATE TABLE IF NOT EXISTS personal_data (
                id BIGSERIAL PRIMARY KEY,
                age INTEGER NOT NULL,
                sex TEXT NOT NULL,
                emotion TEXT NOT NULL
            )"
        }
        RecordKind::VehicularIncident => {
            "CREATE TABLE IF NOT EXISTS vehicular_incidents (
                id BIGSERIAL PRIMARY KEY,
                type TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                location TEXT NOT NULL,
                plates TEXT NOT NULL
            )"
        }
        RecordKind::Camera => {
            "CREATE TABLE IF NOT EXISTS cameras (
                id BIGSERIAL PRIMARY KEY,
                number TEXT NOT NULL,
                address TEXT NOT NULL,
                type TEXT NOT NULL,
                location TEXT NOT NULL,
                resolution TEXT NOT NULL
            )"
        }
    }
}

/// Ensure every record table exists.
///
/// Stops at the first failing statement; tables created before the failure
/// are kept.
pub async fn bootstrap_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for kind in RecordKind::ALL {
        sqlx::query(create_table_sql(kind)).execute(pool).await?;
        tracing::debug!(table = table_name(kind), "Table ensured");
    }
    Ok(())
}
