//! Key event handling for the login/register section.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::auth::AuthStore;
use crate::event::AppEvent;
use crate::ui::auth::{AuthMode, AuthPane};

/// Handle a key press while the auth section is active.
pub fn handle_key_event(
    pane: &mut AuthPane,
    store: &mut AuthStore,
    events: &UnboundedSender<AppEvent>,
    key_evt: KeyEvent,
) {
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL);
    match key_evt.code {
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => pane.toggle_mode(),
        KeyCode::Tab => pane.focus_next(),
        KeyCode::Enter => submit(pane, store, events),
        KeyCode::Char(c) => pane.insert_char(c),
        KeyCode::Backspace => pane.backspace(),
        _ => {}
    }
}

fn submit(pane: &mut AuthPane, store: &mut AuthStore, events: &UnboundedSender<AppEvent>) {
    let username = pane.username().trim().to_string();
    if username.is_empty() || pane.password().is_empty() {
        pane.set_status("Username and password are required!");
        return;
    }

    match pane.mode() {
        AuthMode::Login => match store.login(&username, pane.password()) {
            Ok(session) => {
                pane.reset_password();
                pane.set_status(format!("Welcome back, {}!", session.username));
                if events
                    .send(AppEvent::LoggedIn {
                        username: session.username,
                    })
                    .is_err()
                {
                    tracing::warn!("app event sink closed during login");
                }
            }
            Err(e) => {
                pane.reset_password();
                pane.set_status(e.to_string());
            }
        },
        AuthMode::Register => {
            let email = pane.email().trim().to_string();
            match store.register(&username, &email, pane.password()) {
                Ok(()) => {
                    pane.toggle_mode(); // back to the login form
                    pane.set_status("Registration successful! You can now login.");
                }
                Err(e) => pane.set_status(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::event::init_app_eventsource;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_r() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)
    }

    fn temp_store(name: &str) -> AuthStore {
        let path = std::env::temp_dir().join(format!(
            "shadow-console-authevt-{}-{name}.json",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        AuthStore::open(path)
    }

    fn type_text(pane: &mut AuthPane, store: &mut AuthStore, text: &str) {
        let (tx, _rx) = init_app_eventsource();
        for c in text.chars() {
            handle_key_event(pane, store, &tx, key(KeyCode::Char(c)));
        }
    }

    fn register(pane: &mut AuthPane, store: &mut AuthStore, user: &str, pw: &str) {
        let (tx, _rx) = init_app_eventsource();
        handle_key_event(pane, store, &tx, ctrl_r()); // switch to register
        type_text(pane, store, user);
        handle_key_event(pane, store, &tx, key(KeyCode::Tab));
        type_text(pane, store, "user@example.com");
        handle_key_event(pane, store, &tx, key(KeyCode::Tab));
        type_text(pane, store, pw);
        handle_key_event(pane, store, &tx, key(KeyCode::Enter));
    }

    #[test]
    fn register_then_login_emits_logged_in() {
        let (tx, mut rx) = init_app_eventsource();
        let mut pane = AuthPane::new();
        let mut store = temp_store("happy-path");

        register(&mut pane, &mut store, "neo", "rabbit");
        assert_eq!(
            pane.status(),
            Some("Registration successful! You can now login.")
        );
        assert_eq!(pane.mode(), AuthMode::Login);

        type_text(&mut pane, &mut store, "neo");
        handle_key_event(&mut pane, &mut store, &tx, key(KeyCode::Tab));
        type_text(&mut pane, &mut store, "rabbit");
        handle_key_event(&mut pane, &mut store, &tx, key(KeyCode::Enter));

        match rx.try_recv() {
            Ok(AppEvent::LoggedIn { username }) => assert_eq!(username, "neo"),
            other => panic!("expected LoggedIn, got {other:?}"),
        }
    }

    #[test]
    fn wrong_password_surfaces_alert_text() {
        let (tx, mut rx) = init_app_eventsource();
        let mut pane = AuthPane::new();
        let mut store = temp_store("wrong-pw");

        register(&mut pane, &mut store, "trinity", "right");

        type_text(&mut pane, &mut store, "trinity");
        handle_key_event(&mut pane, &mut store, &tx, key(KeyCode::Tab));
        type_text(&mut pane, &mut store, "wrong");
        handle_key_event(&mut pane, &mut store, &tx, key(KeyCode::Enter));

        assert_eq!(pane.status(), Some("Invalid credentials!"));
        assert!(rx.try_recv().is_err());
        // Password field is cleared for the retry.
        assert_eq!(pane.password(), "");
    }

    #[test]
    fn duplicate_registration_surfaces_alert_text() {
        let mut pane = AuthPane::new();
        let mut store = temp_store("dup");

        register(&mut pane, &mut store, "smith", "pw1");
        register(&mut pane, &mut store, "smith", "pw2");
        assert_eq!(pane.status(), Some("Username already exists!"));
    }

    #[test]
    fn empty_fields_are_rejected_before_the_store() {
        let (tx, _rx) = init_app_eventsource();
        let mut pane = AuthPane::new();
        let mut store = temp_store("empty");

        handle_key_event(&mut pane, &mut store, &tx, key(KeyCode::Enter));
        assert_eq!(pane.status(), Some("Username and password are required!"));
        assert_eq!(store.user_count(), 0);
    }
}
