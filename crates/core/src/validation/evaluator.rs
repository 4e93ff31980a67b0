//! Rule evaluator -- pure logic, no database access.

use serde_json::{Map, Value};

use super::rules::{FieldKind, FieldRule, FieldViolation};
use crate::error::CoreError;
use crate::record::RecordKind;

/// Check a raw JSON object against the rule table of `kind`.
///
/// Returns one violation per failing field, in the order the rules are
/// declared. An empty vector means the record may be persisted. Keys with
/// no matching rule are ignored.
pub fn validate(kind: RecordKind, data: &Map<String, Value>) -> Vec<FieldViolation> {
    kind.rules()
        .iter()
        .filter_map(|rule| evaluate_rule(rule, data.get(rule.field)))
        .collect()
}

/// Like [`validate`], but folds any violations into [`CoreError::Validation`].
pub fn ensure_valid(kind: RecordKind, data: &Map<String, Value>) -> Result<(), CoreError> {
    let errors = validate(kind, data);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}

fn evaluate_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        None | Some(Value::Null) => return Some(required(rule)),
        Some(Value::String(s)) if s.is_empty() => return Some(required(rule)),
        Some(v) => v,
    };

    match rule.kind {
        // PostgreSQL TEXT cannot hold NUL bytes.
        FieldKind::Text => match value.as_str() {
            Some(s) if s.contains('\0') => Some(FieldViolation::new(
                rule.field,
                format!("{} must not contain NUL characters", rule.field),
            )),
            Some(_) => None,
            None => Some(FieldViolation::new(
                rule.field,
                format!("{} must be a string", rule.field),
            )),
        },
        FieldKind::NonNegativeInteger => match value.as_i64() {
            Some(n) if (0..=i64::from(i32::MAX)).contains(&n) => None,
            _ => Some(FieldViolation::new(
                rule.field,
                format!("{} must be a non-negative integer", rule.field),
            )),
        },
    }
}

fn required(rule: &FieldRule) -> FieldViolation {
    FieldViolation::new(rule.field, format!("{} is required", rule.field))
}
