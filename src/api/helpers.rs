//! API Gateway proxy response builders.

use serde_json::{Value, json};

use crate::errors::WebhookError;

/// Returns a proxy response whose body is `{"message": <message>}`.
#[must_use]
pub fn message_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "message": message }).to_string()
    })
}

/// The fixed acknowledgment sent once a webhook has been verified.
#[must_use]
pub fn ok_response() -> Value {
    message_response(200, "OK")
}

/// Maps a request-level failure to its status code and message. Internal
/// errors echo their text verbatim.
#[must_use]
pub fn err_response(error: &WebhookError) -> Value {
    message_response(error.status_code(), &error.to_string())
}
