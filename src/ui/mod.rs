//! User interface module for the TUI application.
//!
//! One themed outer frame, with the active section's pane rendered inside.

use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Widget};

use crate::app::App;
use crate::section::Section;

pub mod auth;
pub mod console;
pub mod home;

impl Widget for &App {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer) {
        let title = format!(" shadow-console [{}] ", self.section().title());
        let mut outer_block = Block::new()
            .borders(Borders::all())
            .border_style(Style::new().fg(self.theme().primary()))
            .title(Line::from(title.bold()));
        if self.command_mode() {
            outer_block = outer_block
                .title_bottom(Line::from(" n: section | t: theme | l: redraw | q: quit ".dim()));
        }
        let inner_area = outer_block.inner(area);
        outer_block.render(area, buf);

        match self.section() {
            Section::Home => home::render(inner_area, buf, self.theme()),
            Section::Console => self.console.render(inner_area, buf, self.theme()),
            Section::Auth => self.auth_pane.render(inner_area, buf, self.theme()),
        }
    }
}
