use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::errors::WebhookError;

/// Looks up a header by name, falling back to a case-insensitive match.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Pulls the raw body bytes out of an API Gateway proxy event.
///
/// Bodies flagged with `isBase64Encoded` are decoded first so the signature
/// is checked against the bytes LINE actually signed.
pub fn extract_body(payload: &Value) -> Result<Vec<u8>, WebhookError> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Err(WebhookError::BadRequest);
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        BASE64.decode(body).map_err(|_| WebhookError::BadRequest)
    } else {
        Ok(body.as_bytes().to_vec())
    }
}

/// The signature header value, or an empty string when absent.
pub fn extract_signature<'a>(payload: &'a Value, header_name: &str) -> &'a str {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, header_name))
        .unwrap_or("")
}
