//! Home section: the themed splash screen.

use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Decorative stats, matching the console banner. Not real counts.
const STATS: [&str; 3] = [
    "2847 exploits | 1234 auxiliary | 567 post",
    "1234 payloads | 45 encoders | 11 nops",
    "9 evasion",
];

pub fn render(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let accent = Style::new().fg(theme.primary());
    let mut lines = vec![
        Line::from("ShadowHall Security".bold()).style(accent),
        Line::from("MetaSploit Framework Console v6.3.47-dev"),
        Line::from(""),
    ];
    lines.extend(STATS.iter().map(|s| Line::from(*s).style(accent)));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "Ctrl+B then n to switch sections, t to change theme, q to quit.",
    ));
    lines.push(Line::from(
        "The console is a simulation: no scans, exploits, or processes are real.",
    ));
    Paragraph::new(lines).render(area, buf);
}
