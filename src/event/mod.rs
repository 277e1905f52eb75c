//! Event handling system for the application.
//!
//! Two channels keep the app responsive: user input events (keyboard,
//! resize) are read on a dedicated thread so the UI never blocks on the
//! terminal, while app events carry internal coordination such as deferred
//! console output arriving from the timer queue and auth results.
//!
//! # Submodules
//!
//! - `console`: key event handling for the console section
//! - `auth`: key event handling for the login/register section

pub mod auth;
pub mod console;

use std::io::Result;
use std::thread;

use tokio::sync::mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender};

use crate::console::OutputLine;

/// Type alias for user input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Initializes the user event stream.
///
/// Spawns a dedicated thread that blocks on `crossterm::event::read()` and
/// forwards events through a bounded channel. The thread terminates on its
/// own once the receiver is dropped and a send fails.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Application-wide events for inter-component communication.
///
/// Marked `#[non_exhaustive]` so new event types can be added without
/// breaking downstream matches.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AppEvent {
    /// Deferred console output whose timer has elapsed. Appended to the
    /// transcript in arrival order, interleaving with whatever was typed
    /// in the meantime.
    ConsoleOutput { lines: Vec<OutputLine> },

    /// A login succeeded; the app switches to the console section and
    /// greets the user there.
    LoggedIn { username: String },
}

/// Initializes the application event system.
///
/// Unbounded is appropriate here: app events are low-frequency (a deferred
/// block per timed command, the odd auth result) and lightweight, and the
/// senders live inside async tasks that must not block.
pub fn init_app_eventsource() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}
