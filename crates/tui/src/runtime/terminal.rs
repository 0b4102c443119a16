//! Terminal state management and cleanup.
//!
//! Ensures terminal state is restored on application exit, even
//! during panics, via a Drop guard.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Must be created after terminal setup is complete
/// - Must live for the duration of the TUI session
/// - Drop implementation must not panic
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state, ignoring errors since we're in drop
        // and must not panic. The explicit cleanup in main() runs
        // first on normal exit; this is the safety net for panics.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
