//! File logging for a fullscreen app: stdout belongs to the terminal UI,
//! so everything goes to a rolling file under the temp dir.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "gridboard=info";

/// Keeps the background log writer alive; dropping it flushes the file.
pub struct LogHandle {
    _worker: WorkerGuard,
    dir: PathBuf,
}

impl LogHandle {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Best-effort setup: a board session works fine without a log file, so
/// every failure path degrades to None instead of erroring.
pub fn init() -> Option<LogHandle> {
    let dir = std::env::temp_dir().join("gridboard").join("logs");
    std::fs::create_dir_all(&dir).ok()?;

    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, "gridboard.log"));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init()
        .ok()?;

    // Panics would otherwise vanish into the alternate screen.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic");
    }));

    tracing::info!(dir = %dir.display(), "logging to file");
    Some(LogHandle {
        _worker: worker,
        dir,
    })
}
