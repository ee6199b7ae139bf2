//! Webhook verification and event dispatch.

use tracing::{debug, info};

use super::signature;
use crate::bot::RecipeBot;
use crate::core::models::{MessageContent, WebhookEnvelope, WebhookEvent};
use crate::errors::{RecipeBotError, WebhookError};
use crate::features::{handle_image_message, handle_text_message};

/// Verifies a raw webhook body and dispatches each of its events.
///
/// `raw_body` must be the unmodified request bytes; `signature_header` is the
/// `x-line-signature` value, or empty when absent.
///
/// # Errors
///
/// `InvalidSignature` if the signature does not match (nothing is parsed or
/// dispatched); `Internal` if the verified body is not a valid envelope.
/// Failures inside individual handlers are not reported here.
pub async fn handle_webhook(
    bot: &RecipeBot,
    raw_body: &[u8],
    signature_header: &str,
) -> Result<(), WebhookError> {
    if !signature::verify_line_signature(raw_body, signature_header, bot.channel_secret()) {
        return Err(WebhookError::InvalidSignature);
    }

    let envelope: WebhookEnvelope =
        serde_json::from_slice(raw_body).map_err(RecipeBotError::from)?;

    info!(
        destination = envelope.destination.as_deref().unwrap_or(""),
        events = envelope.events.len(),
        "Webhook verified"
    );

    for event in &envelope.events {
        dispatch_event(bot, event).await;
    }

    Ok(())
}

async fn dispatch_event(bot: &RecipeBot, event: &WebhookEvent) {
    let WebhookEvent::Message(message_event) = event else {
        debug!("Skipping unsupported event type");
        return;
    };

    match &message_event.message {
        MessageContent::Text { text, .. } => {
            handle_text_message(bot, message_event, text).await;
        }
        MessageContent::Image { id } => {
            handle_image_message(bot, message_event, id).await;
        }
        MessageContent::Unsupported => {
            debug!("Skipping unsupported message type");
        }
    }
}

