use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::analyzer::{SentenceSentiment, SentimentAnalyzer};
use crate::error::AppError;

/// Client for the hosted natural-language sentiment endpoint
/// (`POST {base}/v1/documents:analyzeSentiment`).
pub struct LanguageApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LanguageApiClient {
    pub fn new(http: Client, base_url: &str, api_key: Option<String>) -> Self {
        LanguageApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentResponse {
    #[serde(default)]
    document_sentiment: Option<SentimentValues>,
    #[serde(default)]
    sentences: Vec<SentenceEntry>,
}

#[derive(Deserialize, Default)]
struct SentimentValues {
    #[serde(default)]
    score: f32,
    #[serde(default)]
    magnitude: f32,
}

#[derive(Deserialize)]
struct SentenceEntry {
    #[serde(default)]
    text: TextSpan,
    #[serde(default)]
    sentiment: SentimentValues,
}

#[derive(Deserialize, Default)]
struct TextSpan {
    #[serde(default)]
    content: String,
}

fn unavailable(source: impl Into<anyhow::Error>) -> AppError {
    AppError::ServiceUnavailable {
        service: "sentiment service",
        source: source.into(),
    }
}

#[async_trait::async_trait]
impl SentimentAnalyzer for LanguageApiClient {
    async fn analyze(&self, text: &str) -> Result<Vec<SentenceSentiment>, AppError> {
        let url = format!("{}/v1/documents:analyzeSentiment", self.base_url);
        let body = json!({
            "document": { "type": "PLAIN_TEXT", "content": text },
            "encodingType": "UTF8"
        });

        let mut request = self.http.post(url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json::<AnalyzeSentimentResponse>()
            .await
            .map_err(unavailable)?;

        if let Some(doc) = &response.document_sentiment {
            tracing::debug!(
                score = doc.score,
                magnitude = doc.magnitude,
                "document sentiment"
            );
        }

        Ok(response
            .sentences
            .into_iter()
            .map(|entry| SentenceSentiment {
                text: entry.text.content,
                score: entry.sentiment.score,
                magnitude: entry.sentiment.magnitude,
            })
            .collect())
    }
}
