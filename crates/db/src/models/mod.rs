//! Row structs (database output) and create DTOs (validated request input).

pub mod alert;
pub mod camera;
pub mod personal_data;
pub mod vehicular_incident;
