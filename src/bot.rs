use std::sync::Arc;

use crate::ai::{ClaudeClient, RecipeGenerator};
use crate::core::config::AppConfig;
use crate::line::{LineClient, MessagingApi};
use crate::storage::{ImageStore, S3ImageStore};

/// The bot's collaborators plus the channel secret used to verify webhooks.
///
/// Built once per process and shared by reference across invocations.
pub struct RecipeBot {
    channel_secret: String,
    messaging: Arc<dyn MessagingApi>,
    storage: Arc<dyn ImageStore>,
    recipes: Arc<dyn RecipeGenerator>,
}

impl RecipeBot {
    #[must_use]
    pub fn new(
        channel_secret: String,
        messaging: Arc<dyn MessagingApi>,
        storage: Arc<dyn ImageStore>,
        recipes: Arc<dyn RecipeGenerator>,
    ) -> Self {
        Self {
            channel_secret,
            messaging,
            storage,
            recipes,
        }
    }

    /// Wires the production clients: LINE over HTTPS, S3, and Claude.
    pub async fn from_config(config: &AppConfig) -> Self {
        let storage = S3ImageStore::from_env(config.s3_bucket_name.clone()).await;

        Self::new(
            config.line_channel_secret.clone(),
            Arc::new(LineClient::from_config(config)),
            Arc::new(storage),
            Arc::new(ClaudeClient::from_config(config)),
        )
    }

    #[must_use]
    pub fn channel_secret(&self) -> &str {
        &self.channel_secret
    }

    #[must_use]
    pub fn messaging(&self) -> &dyn MessagingApi {
        self.messaging.as_ref()
    }

    #[must_use]
    pub fn storage(&self) -> &dyn ImageStore {
        self.storage.as_ref()
    }

    #[must_use]
    pub fn recipes(&self) -> &dyn RecipeGenerator {
        self.recipes.as_ref()
    }
}
