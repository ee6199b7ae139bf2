//! Lambda handler for the LINE webhook endpoint.
//!
//! Extracts the raw body and signature header from the API Gateway proxy
//! event, hands them to the verifier/dispatcher, and maps the outcome to a
//! proxy response.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing, signature::SIGNATURE_HEADER, webhook};
use crate::bot::RecipeBot;
use crate::errors::WebhookError;

pub use self::function_handler as handler;

/// Lambda entry point.
///
/// # Errors
///
/// Never returns `Err`: every failure is reported as a proxy response with a
/// 400 or 500 status.
#[tracing::instrument(level = "info", skip(bot, event), fields(
    correlation_id = tracing::field::Empty,
    request_id = tracing::field::Empty
))]
pub async fn function_handler(bot: &RecipeBot, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    let span = tracing::Span::current();
    span.record("correlation_id", correlation_id.as_str());
    span.record("request_id", event.context.request_id.as_str());

    info!("Webhook Lambda received request");
    Ok(process_request(bot, &event.payload).await)
}

/// Runs one proxy event through verification and dispatch.
pub async fn process_request(bot: &RecipeBot, payload: &Value) -> Value {
    match handle_request(bot, payload).await {
        Ok(()) => helpers::ok_response(),
        Err(e) => {
            match &e {
                WebhookError::BadRequest => warn!("Invalid request"),
                WebhookError::InvalidSignature => warn!("Invalid signature"),
                WebhookError::Internal(msg) => error!("Error: {}", msg),
            }
            helpers::err_response(&e)
        }
    }
}

async fn handle_request(bot: &RecipeBot, payload: &Value) -> Result<(), WebhookError> {
    let body = parsing::extract_body(payload)?;
    let signature = parsing::extract_signature(payload, SIGNATURE_HEADER);
    webhook::handle_webhook(bot, &body, signature).await
}
