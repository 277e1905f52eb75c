//! Command history with up/down recall.
//!
//! Entries are append-only and kept in execution order. A cursor ranges over
//! `[0, len]`; `cursor == len` means no recall is in progress and the input
//! line is fresh. Recall moves the cursor without touching the entries.

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed command and reset the cursor past the end.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step the cursor back and return the entry to surface as the input
    /// value. Returns `None` at the oldest entry (input stays as-is).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Step the cursor forward. Past the newest entry the cursor parks at
    /// `len` and the input value becomes empty.
    pub fn recall_next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries[self.cursor].as_str()
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }
}
