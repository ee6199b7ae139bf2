//! LINE Messaging API integration

pub mod client;
pub mod messages;

use async_trait::async_trait;

use crate::errors::RecipeBotError;

pub use client::LineClient;

/// Messaging-platform operations the bot depends on.
#[async_trait]
pub trait MessagingApi: Send + Sync {
    /// Downloads the binary content (image bytes) of a user message.
    async fn fetch_message_content(&self, message_id: &str) -> Result<Vec<u8>, RecipeBotError>;

    /// Sends a text reply using a single-use reply token.
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), RecipeBotError>;

    /// Sends a text message to a user outside of any reply token.
    async fn push_text(&self, user_id: &str, text: &str) -> Result<(), RecipeBotError>;
}
