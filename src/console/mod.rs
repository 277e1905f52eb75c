//! The simulated console: command interpreter, history, and output sink.
//!
//! This is the core of the application. The interpreter is deliberately
//! self-contained: it parses a submitted line, dispatches against a closed
//! command set, and describes its output (immediate and deferred) without
//! touching the UI or the timer queue. The app layer wires it to the
//! transcript and the tokio runtime.

mod command;
mod history;
mod interpreter;
mod output;
mod schedule;

pub use command::Command;
pub use history::History;
pub use interpreter::{Deferred, Interpreter, Response, PROMPT};
pub use output::{LineKind, OutputLine, Transcript, BANNER};
pub use schedule::ScheduledEmission;
