//! LINE Messaging API client module
//!
//! Thin reqwest wrapper over the reply, push and content endpoints.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::MessagingApi;
use super::messages::{push_payload, reply_payload};
use crate::core::config::AppConfig;
use crate::errors::RecipeBotError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct LineClient {
    http: Client,
    access_token: String,
    api_base_url: Url,
    data_api_base_url: Url,
}

fn endpoint(base: &Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path)
}

impl LineClient {
    #[must_use]
    pub fn new(access_token: String, api_base_url: Url, data_api_base_url: Url) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using default: {}", e);
                Client::new()
            });

        Self {
            http,
            access_token,
            api_base_url,
            data_api_base_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.line_channel_access_token.clone(),
            config.line_api_base_url.clone(),
            config.line_data_api_base_url.clone(),
        )
    }

    async fn post_message(&self, path: &str, body: &Value) -> Result<(), RecipeBotError> {
        let response = self
            .http
            .post(endpoint(&self.api_base_url, path))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(RecipeBotError::LineApiError(format!(
                "{} returned {}: {}",
                path, status, error_text
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl MessagingApi for LineClient {
    async fn fetch_message_content(&self, message_id: &str) -> Result<Vec<u8>, RecipeBotError> {
        let path = format!("v2/bot/message/{message_id}/content");
        let response = self
            .http
            .get(endpoint(&self.data_api_base_url, &path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(RecipeBotError::LineApiError(format!(
                "content for message {} returned {}: {}",
                message_id, status, error_text
            )));
        }

        let mut content = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            content.extend_from_slice(&chunk?);
        }

        info!(
            message_id = %message_id,
            bytes = content.len(),
            "Fetched message content"
        );
        Ok(content)
    }

    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), RecipeBotError> {
        debug!(chars = text.chars().count(), "Sending reply");
        self.post_message("v2/bot/message/reply", &reply_payload(reply_token, text))
            .await
    }

    async fn push_text(&self, user_id: &str, text: &str) -> Result<(), RecipeBotError> {
        debug!(user_id = %user_id, chars = text.chars().count(), "Sending push message");
        self.post_message("v2/bot/message/push", &push_payload(user_id, text))
            .await
    }
}
