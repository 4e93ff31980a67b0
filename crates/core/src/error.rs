use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
}
