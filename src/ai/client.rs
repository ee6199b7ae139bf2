//! Claude (Anthropic Messages API) client module
//!
//! Sends the ingredient photo with the recipe prompt and pulls the generated
//! text out of the response.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

use super::RecipeGenerator;
use crate::core::config::AppConfig;
use crate::errors::RecipeBotError;
use crate::prompt::RECIPE_PROMPT;
use crate::storage::IMAGE_CONTENT_TYPE;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Text pushed to the user whenever recipe generation fails.
pub const RECIPE_ERROR_TEXT: &str =
    "レシピの生成中にエラーが発生しました。申し訳ありませんが、もう一度お試しください。";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct ClaudeClient {
    http: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    api_url: Url,
}

impl ClaudeClient {
    #[must_use]
    pub fn new(api_key: String, model: String, max_tokens: u32, api_url: Url) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using default: {}", e);
                Client::new()
            });

        Self {
            http,
            api_key,
            model,
            max_tokens,
            api_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.claude_api_key.clone(),
            config.claude_model.clone(),
            config.claude_max_tokens,
            config.claude_api_url.clone(),
        )
    }

    /// Request body: the prompt followed by the photo as inline base64.
    #[must_use]
    pub fn build_request(&self, image: &[u8]) -> Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": RECIPE_PROMPT },
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": IMAGE_CONTENT_TYPE,
                                "data": BASE64.encode(image),
                            }
                        }
                    ]
                }
            ]
        })
    }

    async fn request_recipe(&self, image: &[u8]) -> Result<String, RecipeBotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using recipe prompt:\n{}", RECIPE_PROMPT);

        info!(
            model = %self.model,
            image_bytes = image.len(),
            "Requesting recipe from Claude"
        );

        let response = self
            .http
            .post(self.api_url.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.build_request(image))
            .send()
            .await
            .map_err(|e| RecipeBotError::HttpError(format!("Claude API request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecipeBotError::ModelError(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RecipeBotError::ModelError(format!("Failed to parse Claude response: {}", e))
        })?;

        extract_recipe_text(&response_json)
            .ok_or_else(|| RecipeBotError::ModelError("No text in response".to_string()))
    }
}

/// Reads `content[0].text` from a Messages API response.
#[must_use]
pub fn extract_recipe_text(response: &Value) -> Option<String> {
    response
        .get("content")
        .and_then(|c| c.get(0))
        .and_then(|block| block.get("text"))
        .and_then(|t| t.as_str())
        .map(ToString::to_string)
}

#[async_trait]
impl RecipeGenerator for ClaudeClient {
    async fn generate_recipe(&self, image: &[u8]) -> String {
        self.request_recipe(image).await.unwrap_or_else(|e| {
            error!("Error generating recipe: {}", e);
            RECIPE_ERROR_TEXT.to_string()
        })
    }
}
