pub mod alert;
pub mod camera;
pub mod personal_data;
pub mod vehicular;
pub mod welcome;
