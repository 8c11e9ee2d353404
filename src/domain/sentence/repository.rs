use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::domain::sentence::model::{SentenceRecord, Sentiment};
use crate::error::AppError;

type Result<T> = std::result::Result<T, AppError>;

#[async_trait::async_trait]
pub trait SentenceRepository: Send + Sync {
    /// Writes the record, replacing any existing record under the same key.
    /// Last writer wins; there is no concurrency check.
    async fn put(&self, record: &SentenceRecord) -> Result<()>;

    /// Every stored record, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<SentenceRecord>>;
}

#[derive(Debug)]
pub struct SqliteSentenceRepository {
    pool: Arc<Pool<Sqlite>>,
}

#[derive(sqlx::FromRow)]
struct SentenceRow {
    key: String,
    text: String,
    timestamp: DateTime<Utc>,
    sentiment: String,
}

impl From<SentenceRow> for SentenceRecord {
    fn from(row: SentenceRow) -> Self {
        SentenceRecord {
            key: row.key,
            text: row.text,
            timestamp: row.timestamp,
            sentiment: Sentiment::parse(&row.sentiment),
        }
    }
}

impl SqliteSentenceRepository {
    pub fn new(pool: Arc<Pool<Sqlite>>) -> Self {
        SqliteSentenceRepository { pool }
    }

    /// Creates the `sentences` table when it is not there yet.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sentences (
                key TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                sentiment TEXT NOT NULL
            )",
        )
        .execute(self.pool.as_ref())
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SentenceRepository for SqliteSentenceRepository {
    async fn put(&self, record: &SentenceRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO sentences (key, text, timestamp, sentiment) VALUES ($1, $2, $3, $4)
             ON CONFLICT(key) DO UPDATE SET
                 text = excluded.text,
                 timestamp = excluded.timestamp,
                 sentiment = excluded.sentiment",
        )
        .bind(&record.key)
        .bind(&record.text)
        .bind(record.timestamp)
        .bind(record.sentiment.as_str())
        .execute(self.pool.as_ref())
        .await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<SentenceRecord>> {
        let rows = sqlx::query_as::<_, SentenceRow>(
            "SELECT key, text, timestamp, sentiment FROM sentences",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows.into_iter().map(SentenceRecord::from).collect())
    }
}
