use tracing::{error, info, warn};

use crate::bot::RecipeBot;
use crate::core::models::MessageEvent;

/// Text that asks the bot how to use it.
pub const HELP_TRIGGER: &str = "使い方";

pub const HELP_TEXT: &str = "食材の写真を送るだけで、AIがレシピを提案します。\n冷蔵庫の食材や買った野菜の写真を送ってみてください！";

pub const PHOTO_PROMPT_TEXT: &str = "食材の写真を送ってレシピを提案してもらいましょう！";

/// Picks the canned answer for a user's text message.
#[must_use]
pub fn reply_for(text: &str) -> &'static str {
    if text == HELP_TRIGGER {
        HELP_TEXT
    } else {
        PHOTO_PROMPT_TEXT
    }
}

/// Answers a text message with one reply call. Reply failures are logged and
/// swallowed.
pub async fn handle_text_message(bot: &RecipeBot, event: &MessageEvent, text: &str) {
    let Some(reply_token) = event.reply_token.as_deref() else {
        warn!("Text message event has no reply token, skipping");
        return;
    };

    let response_message = reply_for(text);
    info!(help = (response_message == HELP_TEXT), "Replying to text message");

    if let Err(e) = bot.messaging().reply_text(reply_token, response_message).await {
        error!("LINE API Error: {}", e);
    }
}
