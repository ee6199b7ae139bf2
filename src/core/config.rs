use std::env;
use url::Url;

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_CLAUDE_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_LINE_API_BASE_URL: &str = "https://api.line.me";
pub const DEFAULT_LINE_DATA_API_BASE_URL: &str = "https://api-data.line.me";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub line_channel_secret: String,
    pub line_channel_access_token: String,
    pub s3_bucket_name: String,
    pub claude_api_key: String,
    pub claude_model: String,
    pub claude_max_tokens: u32,
    pub claude_api_url: Url,
    pub line_api_base_url: Url,
    pub line_data_api_base_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{}: environment variable not found", name))
        };
        let url_or = |name: &str, default: &str| {
            let raw = lookup(name).unwrap_or_else(|| default.to_string());
            Url::parse(&raw).map_err(|e| format!("{}: {}", name, e))
        };

        let claude_max_tokens = match lookup("CLAUDE_MAX_TOKENS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("CLAUDE_MAX_TOKENS: {}", e))?,
            None => DEFAULT_CLAUDE_MAX_TOKENS,
        };

        Ok(Self {
            line_channel_secret: required("LINE_CHANNEL_SECRET")?,
            line_channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            s3_bucket_name: required("S3_BUCKET_NAME")?,
            claude_api_key: required("CLAUDE_API_KEY")?,
            claude_model: lookup("CLAUDE_MODEL").unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
            claude_max_tokens,
            claude_api_url: url_or("CLAUDE_API_URL", DEFAULT_CLAUDE_API_URL)?,
            line_api_base_url: url_or("LINE_API_BASE_URL", DEFAULT_LINE_API_BASE_URL)?,
            line_data_api_base_url: url_or(
                "LINE_DATA_API_BASE_URL",
                DEFAULT_LINE_DATA_API_BASE_URL,
            )?,
        })
    }
}
