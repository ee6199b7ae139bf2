use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use super::ImageStore;
use crate::errors::RecipeBotError;

pub struct S3ImageStore {
    client: S3Client,
    bucket: String,
}

impl S3ImageStore {
    #[must_use]
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Builds the store from the Lambda's ambient AWS configuration.
    pub async fn from_env(bucket: String) -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(S3Client::new(&shared_config), bucket)
    }

    #[must_use]
    pub fn object_url(&self, key: &str) -> String {
        object_url(&self.bucket, key)
    }
}

#[must_use]
pub fn object_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put_object(
        &self,
        bytes: Vec<u8>,
        key: &str,
        content_type: &str,
    ) -> Result<String, RecipeBotError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                RecipeBotError::StorageError(format!(
                    "s3 put_object {}: {}",
                    key,
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;

        info!(bucket = %self.bucket, key = %key, bytes = size, "Uploaded image to S3");
        Ok(self.object_url(key))
    }
}
