//! Output lines and the append-only console transcript.
//!
//! The transcript is the display sink the interpreter writes into. Lines are
//! appended in order and never mutated; the only destructive operation is
//! `reset_to_banner`, which replaces everything with the fixed startup block.

/// How a transcript line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An echoed command, prompt included.
    Command,
    /// Regular command output.
    Output,
}

/// A single rendered line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

impl OutputLine {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Command,
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Output,
        }
    }
}

/// The startup banner. The exploit/payload counts are decorative text
/// carried over from the framework this console imitates, not real counts.
pub const BANNER: [&str; 7] = [
    "MetaSploit Framework Console v6.3.47-dev",
    "+ -- --=[ 2847 exploits - 1234 auxiliary - 567 post ]",
    "+ -- --=[ 1234 payloads - 45 encoders - 11 nops ]",
    "+ -- --=[ 9 evasion ]",
    "",
    "Type 'help' for available commands",
    "",
];

/// Append-only log of console output.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Create a transcript pre-filled with the startup banner.
    pub fn new() -> Self {
        let mut t = Self { lines: Vec::new() };
        t.reset_to_banner();
        t
    }

    /// Append a single line. Lines keep their insertion order.
    pub fn append(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// Append several lines in order.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
    }

    /// Replace all content with the fixed banner block.
    pub fn reset_to_banner(&mut self) {
        self.lines.clear();
        self.lines.extend(BANNER.iter().copied().map(OutputLine::output));
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
