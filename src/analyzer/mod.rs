pub mod language_api;

pub use language_api::LanguageApiClient;

use crate::error::AppError;

/// One sentence of the analyzed document, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceSentiment {
    pub text: String,
    pub score: f32,
    pub magnitude: f32,
}

#[async_trait::async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Sends the text out for analysis. One entry per sentence as segmented
    /// by the service; failures surface to the caller, no retries.
    async fn analyze(&self, text: &str) -> Result<Vec<SentenceSentiment>, AppError>;
}
