//! Repository layer: one zero-sized struct per table, each exposing
//! associated async functions that take a `&PgPool`.

pub mod alert_repo;
pub mod camera_repo;
pub mod personal_data_repo;
pub mod vehicular_incident_repo;

pub use alert_repo::AlertRepo;
pub use camera_repo::CameraRepo;
pub use personal_data_repo::PersonalDataRepo;
pub use vehicular_incident_repo::VehicularIncidentRepo;
