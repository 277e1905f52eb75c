//! Cosmetic color themes.
//!
//! Purely visual: switching themes changes rendering colors and nothing
//! else. The console interpreter is unaware of the active theme.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Green,
    Red,
    Blue,
    Purple,
}

impl Theme {
    /// Advance to the next theme, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Green => Self::Red,
            Self::Red => Self::Blue,
            Self::Blue => Self::Purple,
            Self::Purple => Self::Green,
        }
    }

    /// Accent color used for borders, prompts, and echoed commands.
    pub fn primary(&self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Red => Color::Red,
            Self::Blue => Color::Blue,
            Self::Purple => Color::Magenta,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_four_themes() {
        let mut t = Theme::default();
        let mut seen = vec![t];
        for _ in 0..3 {
            t = t.cycle();
            seen.push(t);
        }
        seen.sort_by_key(|t| t.name());
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(Theme::Purple.cycle(), Theme::Green);
    }
}
