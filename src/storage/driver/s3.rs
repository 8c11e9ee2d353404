use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::AppError;
use crate::storage::Storage;

pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: &str) -> Self {
        S3Storage {
            client,
            bucket: bucket.to_string(),
        }
    }
}

fn unavailable(source: impl Into<anyhow::Error>) -> AppError {
    AppError::ServiceUnavailable {
        service: "object storage",
        source: source.into(),
    }
}

#[async_trait::async_trait]
impl Storage for S3Storage {
    async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(filename)
            .content_type(content_type)
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn download_as_text(&self, filename: &str) -> Result<String, AppError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(filename)
            .send()
            .await
            .map_err(unavailable)?;
        let bytes = object
            .body
            .collect()
            .await
            .map_err(unavailable)?
            .into_bytes();
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
