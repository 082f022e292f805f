use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::kernel::services::adapters::ensure_log_dir;

pub const LOG_FILE_PREFIX: &str = "webtop.log";

/// Keeps the non-blocking writer alive; logs stop flushing once it is dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber writing to a daily rolling file. `log_dir`
/// overrides the platform log directory. Returns `None` when no directory is
/// usable or a subscriber is already installed.
pub fn init(log_dir: Option<&Path>) -> Option<LoggingGuard> {
    let log_dir = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).ok()?;
            dir.to_path_buf()
        }
        None => ensure_log_dir()
            .or_else(|_| -> std::io::Result<PathBuf> {
                let dir = std::env::temp_dir().join("webtop").join("logs");
                std::fs::create_dir_all(&dir)?;
                Ok(dir)
            })
            .ok()?,
    };

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("webtop=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
