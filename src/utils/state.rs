use std::sync::Arc;

use sqlx::{Pool, Sqlite};

use crate::analyzer::{LanguageApiClient, SentimentAnalyzer};
use crate::config::Config;
use crate::domain::sentence::{SentenceRepository, SqliteSentenceRepository};
use crate::error::AppError;
use crate::storage::Storage;
use crate::storage::driver::s3::S3Storage;

/// Shared per-process state. Every external-service client is built once
/// here and handed to the handlers, never constructed per request.
#[derive(Clone)]
pub struct AppState {
    pub sentences: Arc<dyn SentenceRepository>,
    pub storage: Arc<dyn Storage>,
    pub analyzer: Arc<dyn SentimentAnalyzer>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, pool: Arc<Pool<Sqlite>>) -> Result<Self, AppError> {
        let sentences = SqliteSentenceRepository::new(pool);
        sentences.init().await?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.storage_endpoint {
            loader = loader.endpoint_url(endpoint.as_str());
        }
        let sdk_config = loader.load().await;
        let storage = S3Storage::new(aws_sdk_s3::Client::new(&sdk_config), &config.bucket);

        let analyzer = LanguageApiClient::new(
            reqwest::Client::new(),
            &config.language_api_url,
            config.language_api_key.clone(),
        );

        Ok(AppState {
            sentences: Arc::new(sentences),
            storage: Arc::new(storage),
            analyzer: Arc::new(analyzer),
            config: Arc::new(config),
        })
    }
}
