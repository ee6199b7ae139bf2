//! Ingredient photo to recipe pipeline.
//!
//! fetch image -> upload to S3 -> "analysing" reply -> Claude -> push result.
//! Fetch and upload failures end in a canned apology push; the model step
//! always produces text.

use chrono::Utc;
use tracing::{error, info, warn};

use crate::bot::RecipeBot;
use crate::core::models::MessageEvent;
use crate::errors::RecipeBotError;
use crate::storage::{IMAGE_CONTENT_TYPE, image_object_key};

pub const PROCESSING_TEXT: &str = "食材を分析中です...しばらくお待ちください。";

pub const APOLOGY_TEXT: &str =
    "申し訳ありません、画像の処理中にエラーが発生しました。もう一度お試しください。";

#[tracing::instrument(level = "info", skip(bot, event))]
pub async fn handle_image_message(bot: &RecipeBot, event: &MessageEvent, message_id: &str) {
    let Some(user_id) = event.source.user_id.as_deref() else {
        warn!(
            source_type = %event.source.kind,
            "Image message has no user id, skipping"
        );
        return;
    };

    let text = match generate_recipe(bot, event.reply_token.as_deref(), user_id, message_id).await
    {
        Ok(recipe) => recipe,
        Err(e) => {
            error!("Error processing image: {}", e);
            APOLOGY_TEXT.to_string()
        }
    };

    if let Err(e) = bot.messaging().push_text(user_id, &text).await {
        error!("LINE API Error: {}", e);
    }
}

/// Runs every stage up to the final push and returns the text to send.
///
/// # Errors
///
/// Returns an error if the image cannot be fetched from LINE or uploaded to
/// storage. In that case the model is never called.
pub async fn generate_recipe(
    bot: &RecipeBot,
    reply_token: Option<&str>,
    user_id: &str,
    message_id: &str,
) -> Result<String, RecipeBotError> {
    let image = bot.messaging().fetch_message_content(message_id).await?;

    let key = image_object_key(user_id, Utc::now());
    let url = bot
        .storage()
        .put_object(image.clone(), &key, IMAGE_CONTENT_TYPE)
        .await?;
    info!(url = %url, "Stored ingredient photo");

    match reply_token {
        Some(token) => {
            if let Err(e) = bot.messaging().reply_text(token, PROCESSING_TEXT).await {
                warn!("Failed to send processing notice: {}", e);
            }
        }
        None => warn!("Image message has no reply token, skipping processing notice"),
    }

    // Runs inline; handing this off to a queue would keep the webhook ack fast.
    Ok(bot.recipes().generate_recipe(&image).await)
}
