//! Console pane: transcript view plus the prompt input line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::console::{LineKind, Transcript, PROMPT};
use crate::theme::Theme;

pub struct ConsolePane {
    pub transcript: Transcript,
    input: String,
    /// Height of the output area at the last render, for scroll math.
    last_output_height: std::cell::Cell<u16>,
}

impl Default for ConsolePane {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePane {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            input: String::new(),
            last_output_height: std::cell::Cell::new(0),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input line (history recall surfaces entries this way).
    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Column offset of the hardware cursor within the input line.
    pub fn cursor_col(&self) -> u16 {
        (PROMPT.width() + self.input.width()) as u16
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        self.last_output_height.set(chunks[0].height);

        let lines: Vec<Line> = self
            .transcript
            .lines()
            .iter()
            .map(|l| match l.kind {
                LineKind::Command => {
                    Line::from(l.text.clone()).style(Style::new().fg(theme.primary()).bold())
                }
                LineKind::Output => Line::from(l.text.clone()),
            })
            .collect();

        // Pin the view to the newest lines.
        let overflow = lines.len().saturating_sub(chunks[0].height as usize);
        Paragraph::new(lines)
            .scroll((overflow as u16, 0))
            .render(chunks[0], buf);

        let input_line = Line::from(vec![
            Span::styled(PROMPT, Style::new().fg(theme.primary()).bold()),
            Span::raw(self.input.as_str()),
        ]);
        Paragraph::new(input_line).render(chunks[1], buf);
    }

    /// Row of the input line relative to the pane area at the last render.
    pub fn input_row(&self) -> u16 {
        self.last_output_height.get()
    }
}
