use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct FakeScreen {
    enters: AtomicUsize,
    leaves: AtomicUsize,
}

impl Screen for FakeScreen {
    fn enter(&self) -> io::Result<()> {
        self.enters.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.leaves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn guard_enters_once_and_leaves_on_drop() {
    let screen = Arc::new(FakeScreen::default());
    {
        let _guard = ScreenGuard::with_screen(screen.clone()).unwrap();
        assert_eq!(screen.enters.load(Ordering::SeqCst), 1);
        assert_eq!(screen.leaves.load(Ordering::SeqCst), 0);
    }
    assert_eq!(screen.leaves.load(Ordering::SeqCst), 1);
}

#[test]
fn restore_runs_at_most_once_across_all_handles() {
    let screen = Arc::new(FakeScreen::default());
    {
        let guard = ScreenGuard::with_screen(screen.clone()).unwrap();
        let restorer = guard.restorer();
        restorer.restore().unwrap();
        restorer.restore().unwrap();
        // The drop at the end of this scope must also be a no-op.
    }
    assert_eq!(screen.leaves.load(Ordering::SeqCst), 1);
}

#[test]
fn shutdown_signals_map_to_shell_exit_codes() {
    assert_eq!(ShutdownSignal::Interrupt.exit_code(), 130);
    assert_eq!(ShutdownSignal::Terminate.exit_code(), 143);
}
