use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gridboard::app::Workbench;
use gridboard::core::event::InputEvent;
use gridboard::core::view::{EventResult, View};
use gridboard::tui::ScreenGuard;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> io::Result<()> {
    let _logging = gridboard::logging::init();

    let guard = ScreenGuard::acquire()?;

    #[cfg(unix)]
    let signal_rx = {
        let (tx, rx) = mpsc::channel();
        gridboard::tui::watch_shutdown_signals(guard.restorer(), tx)?;
        rx
    };
    #[cfg(not(unix))]
    let signal_rx = {
        let (_tx, rx) = mpsc::channel::<gridboard::tui::ShutdownSignal>();
        rx
    };

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut workbench = Workbench::new();

    'main: loop {
        terminal.draw(|frame| workbench.render(frame, frame.area()))?;

        if let Ok(signal) = signal_rx.try_recv() {
            guard.restorer().restore()?;
            std::process::exit(signal.exit_code());
        }

        if event::poll(FRAME_INTERVAL)? {
            loop {
                let input = InputEvent::from(event::read()?);
                if workbench.handle_input(&input) == EventResult::Quit {
                    break 'main;
                }
                // Drain the rest of the burst (drag events flood) before
                // spending a frame.
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        workbench.tick();
    }

    Ok(())
}
