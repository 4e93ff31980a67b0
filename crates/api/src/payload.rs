//! Turns a raw JSON request body into a validated create DTO.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use bdsql_core::record::RecordKind;
use bdsql_core::validation;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Body extractor used by every create handler.
///
/// Taking the rejection as a value lets malformed bodies surface as our own
/// 400 envelope instead of axum's plain-text response.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// Validate `body` against the rule table of `kind` and deserialize it.
///
/// A body that is valid JSON but not an object is treated as an empty
/// object, so every required field is reported missing.
pub fn validated<T: DeserializeOwned>(kind: RecordKind, body: JsonBody) -> AppResult<T> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let data = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    validation::ensure_valid(kind, &data)?;

    serde_json::from_value(Value::Object(data)).map_err(|e| {
        AppError::InternalError(format!("validated {kind} did not match its DTO: {e}"))
    })
}
