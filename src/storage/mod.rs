//! Object storage for user-submitted images

pub mod s3;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::RecipeBotError;

pub use s3::S3ImageStore;

pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `bytes` under `key` and returns the object's URL.
    async fn put_object(
        &self,
        bytes: Vec<u8>,
        key: &str,
        content_type: &str,
    ) -> Result<String, RecipeBotError>;
}

/// `images/{user_id}/{user_id}_{unix_seconds}.jpg`
#[must_use]
pub fn image_object_key(user_id: &str, uploaded_at: DateTime<Utc>) -> String {
    format!(
        "images/{user_id}/{user_id}_{}.jpg",
        uploaded_at.timestamp()
    )
}
