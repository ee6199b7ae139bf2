//! recipebot - a LINE bot that turns a photo of ingredients into a recipe.
//!
//! A single AWS Lambda function sits behind API Gateway and receives LINE
//! Messaging API webhooks:
//! 1. The raw body is verified against the `x-line-signature` header
//!    (base64 HMAC-SHA256 keyed by the channel secret)
//! 2. Text messages get a canned reply explaining how to use the bot
//! 3. Image messages are fetched from LINE, stored in S3, sent to Claude with
//!    a recipe prompt, and the generated recipe is pushed back to the user
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - S3 for storing submitted photos
//! - reqwest for the LINE Messaging API and the Anthropic Messages API
//! - Tokio for async runtime
//!
//! All collaborators sit behind traits ([`line::MessagingApi`],
//! [`storage::ImageStore`], [`ai::RecipeGenerator`]) and are injected into
//! [`RecipeBot`], so tests can swap in fakes.
//!
//! # Example
//!
//! ```no_run
//! use recipebot::RecipeBot;
//! use recipebot::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     recipebot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let bot = RecipeBot::from_config(&config).await;
//!
//!     let body = br#"{"destination":"U0","events":[]}"#;
//!     let signature = recipebot::api::signature::compute_signature(body, &config.line_channel_secret);
//!     recipebot::api::handle_webhook(&bot, body, &signature).await?;
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod bot;
pub mod core;
pub mod errors;
pub mod features;
pub mod line;
pub mod prompt;
pub mod storage;

pub use bot::RecipeBot;
pub use errors::{RecipeBotError, WebhookError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start;
/// later calls are ignored.
///
/// # Example
///
/// ```
/// recipebot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
