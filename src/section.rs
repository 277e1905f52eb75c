//! Section navigation.
//!
//! Only one section is visible at a time; switching toggles which pane the
//! UI renders. The console does not depend on which section is active.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Console,
    Auth,
}

impl Section {
    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Console,
            Self::Console => Self::Auth,
            Self::Auth => Self::Home,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Console => "CONSOLE",
            Self::Auth => "LOGIN",
        }
    }
}
