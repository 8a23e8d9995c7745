use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The terminal state the board runs in: raw mode, the alternate screen,
/// and mouse capture. Capture is not optional here; without it there is no
/// drag gesture to track.
pub trait Screen: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct StdoutScreen;

impl Screen for StdoutScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::EnableMouseCapture;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetCursorStyle::BlinkingBar
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::DisableMouseCapture;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Undo in reverse order, and keep going past a failed step so a
        // broken stdout still gets raw mode switched off.
        let undo_screen = crossterm::execute!(
            io::stdout(),
            SetCursorStyle::DefaultUserShape,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let undo_raw = disable_raw_mode();
        undo_screen.and(undo_raw)
    }
}

/// Cloneable handle that puts the terminal back exactly once. The signal
/// thread and the main loop both hold one; whichever fires first wins.
#[derive(Clone)]
pub struct ScreenRestorer {
    done: Arc<AtomicBool>,
    screen: Arc<dyn Screen>,
}

impl ScreenRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.screen.leave()
    }
}

/// RAII over the screen state for the application's lifetime.
pub struct ScreenGuard {
    restorer: ScreenRestorer,
}

impl ScreenGuard {
    pub fn acquire() -> io::Result<Self> {
        Self::with_screen(Arc::new(StdoutScreen))
    }

    pub fn with_screen(screen: Arc<dyn Screen>) -> io::Result<Self> {
        screen.enter()?;
        Ok(Self {
            restorer: ScreenRestorer {
                done: Arc::new(AtomicBool::new(false)),
                screen,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    /// 128 + signal number, the shell convention.
    pub fn exit_code(self) -> i32 {
        match self {
            ShutdownSignal::Interrupt => 130,
            ShutdownSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the main loop. If the loop has not quit by
/// the end of the grace window the thread restores the screen and exits
/// the process itself, so a wedged frame never leaves the terminal raw.
#[cfg(unix)]
pub fn watch_shutdown_signals(
    restorer: ScreenRestorer,
    notify: std::sync::mpsc::Sender<ShutdownSignal>,
) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        for raw in signals.forever() {
            let signal = match raw {
                SIGINT => ShutdownSignal::Interrupt,
                SIGTERM => ShutdownSignal::Terminate,
                _ => continue,
            };
            let _ = notify.send(signal);

            std::thread::sleep(Duration::from_secs(3));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen.rs"]
mod tests;
