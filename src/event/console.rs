//! Key event handling for the console section.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::console::{Interpreter, ScheduledEmission};
use crate::event::AppEvent;
use crate::ui::console::ConsolePane;

/// Handle a key press while the console section is active.
///
/// Enter submits the input line, Up/Down drive history recall, printable
/// characters and backspace edit the line. Returns the handle of a newly
/// scheduled deferred emission, if the command produced one.
pub fn handle_key_event(
    pane: &mut ConsolePane,
    interpreter: &mut Interpreter,
    events: &UnboundedSender<AppEvent>,
    key_evt: KeyEvent,
) -> Option<ScheduledEmission> {
    match key_evt.code {
        KeyCode::Enter => submit(pane, interpreter, events),
        KeyCode::Up => {
            if let Some(entry) = interpreter.recall_previous() {
                pane.set_input(entry);
            }
            None
        }
        KeyCode::Down => {
            pane.set_input(interpreter.recall_next());
            None
        }
        KeyCode::Char(c) => {
            pane.insert_char(c);
            None
        }
        KeyCode::Backspace => {
            pane.backspace();
            None
        }
        _ => None,
    }
}

/// Execute the current input line.
///
/// Empty or whitespace-only input never reaches the interpreter; it is a
/// no-op and the input line is left untouched.
fn submit(
    pane: &mut ConsolePane,
    interpreter: &mut Interpreter,
    events: &UnboundedSender<AppEvent>,
) -> Option<ScheduledEmission> {
    let line = pane.input().trim().to_string();
    if line.is_empty() {
        return None;
    }

    tracing::debug!(command = %line, "executing console command");
    let response = interpreter.execute(&line);
    pane.clear_input();

    response.apply_immediate(&mut pane.transcript);
    response
        .deferred
        .map(|d| ScheduledEmission::spawn(d, events.clone()))
}
