//! Terminal client entry point.
mod app;
mod input;
mod presentation;

use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use quiz_runtime::{QuizSession, RuntimeConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();

    // Logs go to a file only; stdout belongs to the game prompt.
    let _guard = setup_logging(config.session_id.as_deref())?;

    let session = QuizSession::bootstrap(&config)?;
    CliApp::new(session).run().await
}

/// Setup logging to a per-session file.
fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    };

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/geoquiz/logs` (or `~/.cache/geoquiz/logs`)
/// - macOS: `~/Library/Caches/geoquiz/logs`
/// - Windows: `%LOCALAPPDATA%\geoquiz\cache\logs`
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "geoquiz")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("geoquiz"))
        .join("logs")
}
