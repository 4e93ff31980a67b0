//! Field validation for incoming records.
//!
//! Each [`RecordKind`](crate::record::RecordKind) declares a rule table in
//! [`rules`]; [`evaluator::validate`] checks a raw JSON object against it.

pub mod evaluator;
pub mod rules;

pub use evaluator::{ensure_valid, validate};
pub use rules::{FieldKind, FieldRule, FieldViolation};
