//! One-shot scheduling of deferred console output.
//!
//! A [`ScheduledEmission`] is a handle to a spawned sleep-then-send task.
//! Once scheduled it fires even if the console was cleared or new commands
//! ran in the meantime; ordering against intervening synchronous output is
//! whatever the timer queue dictates. The handle still allows cancellation
//! so a caller may choose to abort pending output without any contract
//! change.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::interpreter::Deferred;
use crate::event::AppEvent;

/// Handle to a pending deferred emission.
#[derive(Debug)]
pub struct ScheduledEmission {
    handle: JoinHandle<()>,
}

impl ScheduledEmission {
    /// Spawn a task that sleeps for the deferred delay and then delivers
    /// the lines through the app event channel.
    pub fn spawn(deferred: Deferred, events: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(deferred.delay).await;
            if events
                .send(AppEvent::ConsoleOutput {
                    lines: deferred.lines,
                })
                .is_err()
            {
                tracing::debug!("console event sink closed before deferred emission");
            }
        });
        Self { handle }
    }

    /// Abort the emission if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the underlying task has completed (fired or been cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
