//! Tracing setup for the `postdeck` binary.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_PATH_ENV: &str = "POSTDECK_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// A per-process file, `{base}.{timestamp}.{pid}`.
    File(PathBuf),
}

impl LogTarget {
    /// Pick the target from `POSTDECK_LOG`.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(LOG_PATH_ENV).ok())
    }

    fn from_setting(setting: Option<String>) -> Self {
        match setting.filter(|s| !s.trim().is_empty()) {
            Some(base) => {
                let timestamp = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                LogTarget::File(PathBuf::from(format!(
                    "{}.{}.{}",
                    base,
                    timestamp,
                    std::process::id()
                )))
            }
            None => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber. Level filter comes from `RUST_LOG`
/// (default `info`). Does nothing if a subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match LogTarget::from_env() {
        LogTarget::Stderr => {
            let _ = registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init();
        }
        LogTarget::File(path) => match std::fs::File::create(&path) {
            Ok(file) => {
                let _ = registry
                    .with(
                        fmt::layer()
                            .with_writer(file)
                            .with_ansi(false)
                            .with_target(true),
                    )
                    .try_init();
            }
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            }
        },
    }
}
