//! File logging through the tracing ecosystem.
//!
//! The TUI owns stdout, so events go to a daily rolling file under the
//! local data directory. Writes happen on a background worker; keep the
//! returned [`LogGuard`] alive until exit so buffered lines are flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tacplay_admin=info,warn";

const LOG_FILE_PREFIX: &str = "tacplay-admin.log";

/// Flushes pending log lines when dropped.
pub struct LogGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LogGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        tracing::info!("TacPlay Admin shutting down");
    }
}

/// Install the global subscriber.
///
/// Logs land in `<data_local_dir>/tacplay-admin/logs/`, e.g.
/// `~/.local/share/tacplay-admin/logs/` on Linux. Use
/// `RUST_LOG=tacplay_admin=debug` for screen changes and dialogs, or
/// `=trace` for every page turn and search keystroke.
///
/// # Errors
///
/// Fails if the log directory cannot be found or created, or if a global
/// subscriber is already installed.
pub fn init() -> anyhow::Result<LogGuard> {
    let log_dir = log_directory()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "TacPlay Admin starting up");

    Ok(LogGuard {
        _worker: worker,
        log_dir,
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Where log files are written.
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("tacplay-admin").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_has_expected_structure() {
        let dir = log_directory().unwrap();
        assert!(dir.ends_with("tacplay-admin/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
