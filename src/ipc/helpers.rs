//! Shared plumbing for the method handlers: parameter extraction and the
//! error shapes every family replies with.

use serde_json::{json, Value};

use crate::ipc::error::err;
use crate::store::TransitionError;
use crate::validators::ValidationResult;

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> Value {
        err(id, self.code, self.message, self.details)
    }
}

/// Reply for any gated method reached without a committed profile.
pub fn no_profile(id: &str) -> Value {
    err(id, "no_profile", "select a profile first", None)
}

pub fn validation_failed(id: &str, fields: &ValidationResult) -> Value {
    err(
        id,
        "validation_failed",
        "Please fix the errors in the form",
        Some(json!({ "fields": fields })),
    )
}

pub fn invalid_transition(id: &str, e: TransitionError) -> Value {
    err(id, "invalid_transition", e.to_string(), None)
}

/// Missing and non-string params read as empty, so the validators report
/// them the same way an untouched form field would be.
pub fn str_param<'a>(params: &'a Value, key: &str) -> &'a str {
    params.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

/// Optional free-text param; blank strings collapse to `None`.
pub fn opt_str_param(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

pub fn int_param(params: &Value, key: &str, default: i64) -> Result<i64, HandlerErr> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| HandlerErr::bad_params(format!("{} must be an integer", key))),
    }
}
