use clap::Parser;

use crate::config::IdMode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Application listening host
    #[arg(long, env = "SENTIBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Application listening port
    #[arg(short, long, env = "SENTIBOARD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Database URL for sentence records
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://sentiboard.db?mode=rwc"
    )]
    pub database_url: String,

    /// Object storage bucket that uploaded files land in
    #[arg(
        short,
        long,
        env = "SENTIBOARD_BUCKET",
        default_value = "sentiboard-uploads"
    )]
    pub bucket: String,

    /// Custom S3-compatible endpoint; the SDK default when unset
    #[arg(long, env = "SENTIBOARD_S3_ENDPOINT")]
    pub storage_endpoint: Option<String>,

    /// Base URL of the sentiment analysis service
    #[arg(
        long,
        env = "LANGUAGE_API_URL",
        default_value = "https://language.googleapis.com"
    )]
    pub language_api_url: String,

    /// API key for the sentiment analysis service
    #[arg(long, env = "LANGUAGE_API_KEY")]
    pub language_api_key: Option<String>,

    /// Record key assignment: `fixed` overwrites one record, `generated` keeps history
    #[arg(long, env = "SENTIBOARD_ID_MODE", value_enum, default_value = "fixed")]
    pub id_mode: IdMode,
}
