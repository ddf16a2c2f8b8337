//! Raw-mode terminal setup with teardown that runs on every exit path.

use crossterm::{
    ExecutableCommand,
    cursor::Show,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    sync::{Arc, Mutex},
};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Holds the terminal teardown and runs it at most once: on `restore`,
/// on drop, or from the panic hook, whichever comes first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&cleanup);
            default_hook(info);
        }));
    }

    pub fn restore(&self) {
        run_once(&self.cleanup);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn run_once(slot: &Mutex<Option<Cleanup>>) {
    // A poisoned lock still holds the cleanup; the terminal must come back.
    let cleanup = match slot.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    if let Some(cleanup) = cleanup {
        cleanup();
    }
}

/// Every step is attempted even if an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Enters raw mode and the alternate screen.
///
/// The guard is armed before the first terminal change, so a failure
/// halfway through setup is still undone when the guard drops.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard::new(restore_terminal);
    guard.install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_guard() -> (TerminalGuard, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let guard = TerminalGuard::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (guard, runs)
    }

    #[test]
    fn test_drop_runs_cleanup() {
        let (guard, runs) = counting_guard();
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restore_then_drop_runs_cleanup_once() {
        let (guard, runs) = counting_guard();
        guard.restore();
        guard.restore();
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cleanup_runs_when_loop_panics() {
        let (guard, runs) = counting_guard();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = guard;
            panic!("draw failed");
        }));

        assert!(result.is_err());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
