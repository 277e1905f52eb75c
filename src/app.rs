//! Application state management.
//!
//! The main App struct holds the global state: the console interpreter and
//! its transcript, the auth store and form, theme, active section, and the
//! handles of pending deferred emissions. It runs the event-driven main
//! loop and routes events to the section handlers.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{Receiver, UnboundedReceiver, UnboundedSender};

use crate::auth::{default_store_path, AuthStore};
use crate::console::{Interpreter, OutputLine, ScheduledEmission};
use crate::event::{auth as auth_event, console as console_event};
use crate::event::{init_app_eventsource, init_user_event, AppEvent, UserEvent};
use crate::section::Section;
use crate::theme::Theme;
use crate::ui::auth::AuthPane;
use crate::ui::console::ConsolePane;

pub struct App {
    // backend
    interpreter: Interpreter,
    auth_store: AuthStore,

    // frontend widgets, public to the ui module
    pub(crate) console: ConsolePane,
    pub(crate) auth_pane: AuthPane,

    // App state
    section: Section,
    theme: Theme,
    exit: bool,
    command_mode: bool,
    force_redraw_flag: bool,

    /// Handles of deferred emissions that have not fired yet. Kept for
    /// bookkeeping; nothing cancels them, matching the simulated console
    /// semantics (a cleared screen does not stop an in-flight scan).
    pending: Vec<ScheduledEmission>,

    // event plumbing
    event_sink: UnboundedSender<AppEvent>,
    user_events: Receiver<std::io::Result<UserEvent>>,
    app_events: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new() -> Result<Self> {
        let (event_sink, app_events) = init_app_eventsource();
        let auth_store = AuthStore::open(default_store_path());

        if let Some(session) = auth_store.current_session() {
            tracing::info!(username = %session.username, "found session within validity window");
        }

        Ok(Self {
            interpreter: Interpreter::new(),
            auth_store,
            console: ConsolePane::new(),
            auth_pane: AuthPane::new(),
            section: Section::default(),
            theme: Theme::default(),
            exit: false,
            command_mode: false,
            force_redraw_flag: false,
            pending: Vec::new(),
            event_sink,
            user_events: init_user_event(),
            app_events,
        })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn command_mode(&self) -> bool {
        self.command_mode
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let usr_evt = res.with_context(|| anyhow::anyhow!("User event stream is ended."))?;
                    self.handle_user_event(usr_evt?);
                }
                res = self.app_events.recv() => {
                    let app_evt = res.with_context(|| anyhow::anyhow!("App event stream is ended"))?;
                    self.handle_app_event(app_evt);
                }
            }
            if self.force_redraw_flag {
                self.force_redraw_flag = false;
                self.force_redraw(terminal)?;
            } else {
                self.draw(terminal)?;
            }
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut full_area = ratatui::layout::Rect::default();
        terminal.draw(|frame| {
            full_area = frame.area();
            use ratatui::widgets::Widget;
            (&*self).render(full_area, frame.buffer_mut());
        })?;

        self.update_cursor_position(terminal, full_area)?;
        Ok(())
    }

    /// Force a full screen clear and redraw.
    pub fn force_redraw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;
        self.draw(terminal)
    }

    fn update_cursor_position(
        &mut self,
        terminal: &mut DefaultTerminal,
        full_area: ratatui::layout::Rect,
    ) -> Result<()> {
        // Only the console input line shows a hardware cursor.
        if self.section != Section::Console || self.command_mode {
            terminal.hide_cursor()?;
            return Ok(());
        }

        // The console pane sits inside the one-cell outer border.
        let cursor_x = full_area.x + 1 + self.console.cursor_col();
        let cursor_y = full_area.y + 1 + self.console.input_row();
        terminal.show_cursor()?;
        terminal.set_cursor_position((cursor_x, cursor_y))?;
        Ok(())
    }
}

impl App {
    fn handle_user_event(&mut self, event: UserEvent) {
        if self.command_mode {
            self.handle_command_mode_events(event);
            return;
        }

        match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => {
                // Ctrl + B => Command Mode
                if key_evt.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key_evt.code, KeyCode::Char('b') | KeyCode::Char('B'))
                {
                    self.command_mode = true;
                    return;
                }

                match self.section {
                    Section::Home => {}
                    Section::Console => {
                        let scheduled = console_event::handle_key_event(
                            &mut self.console,
                            &mut self.interpreter,
                            &self.event_sink,
                            key_evt,
                        );
                        if let Some(emission) = scheduled {
                            self.pending.push(emission);
                        }
                        self.pending.retain(|e| !e.is_finished());
                    }
                    Section::Auth => {
                        auth_event::handle_key_event(
                            &mut self.auth_pane,
                            &mut self.auth_store,
                            &self.event_sink,
                            key_evt,
                        );
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_command_mode_events(&mut self, event: UserEvent) {
        let UserEvent::Key(key_evt) = event else {
            return;
        };
        if !matches!(key_evt.kind, KeyEventKind::Press) {
            return;
        }

        match key_evt.code {
            // n => next section
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.section = self.section.next();
            }
            // t => cycle theme
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme = self.theme.cycle();
                tracing::debug!(theme = self.theme.name(), "theme changed");
            }
            // l => force redraw (clear stderr pollution)
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.force_redraw_flag = true;
            }
            // q => exit application
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.exit = true;
            }
            _ => {}
        }
        self.command_mode = false;
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConsoleOutput { lines } => {
                // Whatever the timer queue delivers is appended as-is,
                // after anything typed in the meantime.
                self.console.transcript.extend(lines);
                self.pending.retain(|e| !e.is_finished());
            }
            AppEvent::LoggedIn { username } => {
                self.section = Section::Console;
                self.console
                    .transcript
                    .append(OutputLine::output(format!("Welcome back, {username}!")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> UserEvent {
        UserEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> UserEvent {
        UserEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[tokio::test]
    async fn login_event_switches_to_console_and_greets() {
        let mut app = App::new().unwrap();
        app.handle_app_event(AppEvent::LoggedIn {
            username: "neo".to_string(),
        });
        assert_eq!(app.section(), Section::Console);
        let last = app.console.transcript.lines().last().unwrap();
        assert_eq!(last.text, "Welcome back, neo!");
    }

    #[tokio::test]
    async fn deferred_output_appends_after_intervening_commands() {
        let mut app = App::new().unwrap();
        app.section = Section::Console;

        for c in "nmap 10.0.0.1".chars() {
            app.handle_user_event(key(KeyCode::Char(c)));
        }
        app.handle_user_event(key(KeyCode::Enter));
        for c in "whoami".chars() {
            app.handle_user_event(key(KeyCode::Char(c)));
        }
        app.handle_user_event(key(KeyCode::Enter));

        // Timer fires later; its lines land after the whoami output.
        app.handle_app_event(AppEvent::ConsoleOutput {
            lines: vec![OutputLine::output("Nmap scan report for 10.0.0.1")],
        });
        let texts: Vec<&str> = app
            .console
            .transcript
            .lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        let whoami_pos = texts.iter().position(|t| *t == "ShadowHall@MetaSploit").unwrap();
        let report_pos = texts
            .iter()
            .position(|t| *t == "Nmap scan report for 10.0.0.1")
            .unwrap();
        assert!(report_pos > whoami_pos);
    }

    #[tokio::test]
    async fn command_mode_cycles_sections_and_theme() {
        let mut app = App::new().unwrap();
        assert_eq!(app.section(), Section::Home);

        app.handle_user_event(ctrl('b'));
        assert!(app.command_mode());
        app.handle_user_event(key(KeyCode::Char('n')));
        assert!(!app.command_mode());
        assert_eq!(app.section(), Section::Console);

        let before = *app.theme();
        app.handle_user_event(ctrl('b'));
        app.handle_user_event(key(KeyCode::Char('t')));
        assert_ne!(*app.theme(), before);
    }

    #[tokio::test]
    async fn q_in_command_mode_requests_exit() {
        let mut app = App::new().unwrap();
        app.handle_user_event(ctrl('b'));
        app.handle_user_event(key(KeyCode::Char('q')));
        assert!(app.exit);
    }
}
