use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use sentiboard::api;
use sentiboard::config::Config;
use sentiboard::utils::cli::Args;
use sentiboard::utils::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = validate_config(&args);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = SqlitePoolOptions::new()
        .max_connections(12)
        .connect(config.db_url.as_str())
        .await?;
    let state = Arc::new(AppState::new(config, Arc::new(pool)).await?);

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", args.host, args.port)).await?;
    println!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Shutting down...");
}

fn validate_config(args: &Args) -> Config {
    let mut validation_errors = Vec::new();

    // sqlite URLs are `sqlite://<path>`; the parent directory must exist
    // before the pool can create the file.
    if let Some(path) = args.database_url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                validation_errors.push(format!(
                    "The directory for the database `{}` does not exist",
                    parent.display(),
                ));
            }
        }
    }

    if args.bucket.is_empty() {
        validation_errors.push("SENTIBOARD_BUCKET must not be empty".to_string());
    }

    if args.language_api_key.is_none() {
        eprintln!(
            "WARNING: LANGUAGE_API_KEY is not set. Requests to the sentiment service will rely on ambient credentials."
        );
    }

    if !validation_errors.is_empty() {
        eprintln!("{}", validation_errors.join("\n"));
        std::process::exit(1);
    }

    Config {
        host: args.host.clone(),
        port: args.port,
        db_url: args.database_url.clone(),
        bucket: args.bucket.clone(),
        storage_endpoint: args.storage_endpoint.clone(),
        language_api_url: args.language_api_url.clone(),
        language_api_key: args.language_api_key.clone(),
        id_mode: args.id_mode,
    }
}
