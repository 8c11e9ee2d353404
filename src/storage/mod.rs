pub mod driver;

use crate::error::AppError;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Stores the bytes under `filename`, silently replacing any existing
    /// object with the same name.
    async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError>;

    /// Reads the object back and decodes it as UTF-8 text.
    async fn download_as_text(&self, filename: &str) -> Result<String, AppError>;
}
