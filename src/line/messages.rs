use serde_json::{Value, json};

/// Maximum characters LINE accepts in one text message.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Truncates `text` to the LINE text limit on a character boundary.
#[must_use]
pub fn clamp_text(text: &str) -> String {
    text.chars().take(MAX_TEXT_LENGTH).collect()
}

#[must_use]
pub fn text_message(text: &str) -> Value {
    json!({ "type": "text", "text": clamp_text(text) })
}

/// Body for `POST /v2/bot/message/reply`.
#[must_use]
pub fn reply_payload(reply_token: &str, text: &str) -> Value {
    json!({
        "replyToken": reply_token,
        "messages": [text_message(text)],
    })
}

/// Body for `POST /v2/bot/message/push`.
#[must_use]
pub fn push_payload(user_id: &str, text: &str) -> Value {
    json!({
        "to": user_id,
        "messages": [text_message(text)],
    })
}
