pub mod human;

use serde_json::{Value, json};

/// Standard JSON envelope printed by every command.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Error code for the envelope, from the typed taxonomy when there is one.
pub fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<crate::models::error::Error>() {
        Some(typed) => typed.code(),
        None => "general_error",
    }
}
