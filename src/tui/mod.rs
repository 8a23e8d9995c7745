pub mod screen;

#[cfg(unix)]
pub use screen::watch_shutdown_signals;
pub use screen::{ScreenGuard, ScreenRestorer, ShutdownSignal};
