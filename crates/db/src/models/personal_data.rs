//! Personal-data record models and DTOs.

use bdsql_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `personal_data` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PersonalData {
    pub id: DbId,
    pub age: i32,
    pub sex: String,
    pub emotion: String,
}

/// DTO for creating a new personal-data record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonalData {
    pub age: i32,
    pub sex: String,
    pub emotion: String,
}
