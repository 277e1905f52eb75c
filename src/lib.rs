//! shadow-console - a themed demo TUI imitating a pentest framework console
//!
//! This library provides the core functionality for shadow-console, including:
//! - The command interpreter with history recall and deferred canned output
//! - Event handling for user input and application events
//! - Section navigation, theme switching, and the demo login flow
//!
//! Nothing here is real: commands return scripted text, "scans" are timers,
//! and the login store is a plaintext demo prop.
//!
//! # Example
//!
//! ```
//! use shadow_console::console::{Interpreter, PROMPT};
//!
//! let mut interpreter = Interpreter::new();
//! let response = interpreter.execute("whoami");
//! assert_eq!(response.lines[0].text, format!("{PROMPT}whoami"));
//! assert_eq!(response.lines[1].text, "ShadowHall@MetaSploit");
//! ```

pub mod app;
pub mod auth;
pub mod console;
pub mod event;
pub mod section;
pub mod theme;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use console::{Interpreter, OutputLine, Response, Transcript};
pub use event::{init_app_eventsource, init_user_event, AppEvent, UserEvent};
pub use section::Section;
pub use theme::Theme;
