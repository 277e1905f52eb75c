//! Login/registration form state and rendering.
//!
//! The form owns its field buffers and a status line. Validation results
//! (duplicate username, bad credentials) surface on the status line, which
//! stands in for the original's blocking alert dialog.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct AuthPane {
    mode: AuthMode,
    username: String,
    email: String,
    password: String,
    focus: AuthField,
    status: Option<String>,
}

impl AuthPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(text.into());
    }

    /// Switch between login and register; field contents and status reset.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.focus = AuthField::Username;
        self.status = None;
    }

    /// Move focus to the next field; the email field only exists when
    /// registering.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (AuthField::Username, AuthMode::Register) => AuthField::Email,
            (AuthField::Username, AuthMode::Login) => AuthField::Password,
            (AuthField::Email, _) => AuthField::Password,
            (AuthField::Password, _) => AuthField::Username,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_buffer().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_buffer().pop();
    }

    /// Clear only the password, keeping the username for a retry.
    pub fn reset_password(&mut self) {
        self.password.clear();
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = match self.mode {
            AuthMode::Login => " Login ",
            AuthMode::Register => " Register ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme.primary()))
            .title(Line::from(title.bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints = vec![Constraint::Length(1); 2];
        if self.mode == AuthMode::Register {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // status
        constraints.push(Constraint::Min(0)); // hint
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut row = 0;
        self.render_field("Username", &self.username, AuthField::Username, rows[row], buf, theme);
        row += 1;
        if self.mode == AuthMode::Register {
            self.render_field("Email", &self.email, AuthField::Email, rows[row], buf, theme);
            row += 1;
        }
        let masked = "*".repeat(self.password.chars().count());
        self.render_field("Password", &masked, AuthField::Password, rows[row], buf, theme);
        row += 1;

        if let Some(status) = &self.status {
            Paragraph::new(Line::from(status.clone()).style(Style::new().fg(theme.primary()).bold()))
                .render(rows[row], buf);
        }
        row += 1;

        let hint = match self.mode {
            AuthMode::Login => "Tab: next field | Enter: login | Ctrl+R: register instead",
            AuthMode::Register => "Tab: next field | Enter: register | Ctrl+R: login instead",
        };
        Paragraph::new(Line::from(hint).style(Style::new().dim())).render(rows[row], buf);
    }

    fn render_field(
        &self,
        label: &str,
        value: &str,
        field: AuthField,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
    ) {
        let marker = if self.focus == field { "> " } else { "  " };
        let line = Line::from(format!("{marker}{label}: {value}"));
        let line = if self.focus == field {
            line.style(Style::new().fg(theme.primary()))
        } else {
            line
        };
        Paragraph::new(line).render(area, buf);
    }
}
