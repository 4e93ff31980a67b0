//! Validation rule and result types, plus the rule table for each record kind.

use serde::Serialize;

use crate::record::RecordKind;

/// What a field's value must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-empty JSON string with no NUL characters.
    Text,
    /// A JSON integer between 0 and `i32::MAX` (a PostgreSQL `INTEGER`).
    NonNegativeInteger,
}

/// A single required field and the shape its value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::Text,
        }
    }

    pub const fn non_negative_integer(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::NonNegativeInteger,
        }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

const ALERT_RULES: &[FieldRule] = &[FieldRule::text("type")];

const PERSONAL_DATA_RULES: &[FieldRule] = &[
    FieldRule::non_negative_integer("age"),
    FieldRule::text("sex"),
    FieldRule::text("emotion"),
];

const VEHICULAR_INCIDENT_RULES: &[FieldRule] = &[
    FieldRule::text("type"),
    FieldRule::text("description"),
    FieldRule::text("date"),
    FieldRule::text("location"),
    FieldRule::text("plates"),
];

const CAMERA_RULES: &[FieldRule] = &[
    FieldRule::text("number"),
    FieldRule::text("address"),
    FieldRule::text("type"),
    FieldRule::text("location"),
    FieldRule::text("resolution"),
];

impl RecordKind {
    /// The required fields of this record kind, in insert order.
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            RecordKind::Alert => ALERT_RULES,
            RecordKind::PersonalData => PERSONAL_DATA_RULES,
            RecordKind::VehicularIncident => VEHICULAR_INCIDENT_RULES,
            RecordKind::Camera => CAMERA_RULES,
        }
    }
}
