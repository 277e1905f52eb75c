//! Terminal restoration guard.

/// Restores the terminal when dropped.
///
/// Held for the lifetime of `main` so the terminal is restored on normal
/// exit and on panic alike; a panic unwinding past raw mode would
/// otherwise leave the user's shell unusable.
pub struct RestoreGuard;

impl RestoreGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RestoreGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
