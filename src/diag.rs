//! Diagnostic log: debug-time messages appended below the dashboard.
//!
//! Code running inside the debugger (including pane implementations) has
//! nowhere safe to print while the dashboard owns the screen, so it pushes
//! lines here instead. The screen manager drains pending lines at the end
//! of each successful draw cycle and prints them under the panes, framed
//! by marker lines.

use std::sync::Mutex;

/// Source of pending diagnostic lines, drained once per draw cycle.
pub trait DiagnosticLog: Send + Sync {
    /// Lines accumulated since the last clear.
    fn pending_lines(&self) -> Vec<String>;
    /// Discard all pending lines.
    fn clear(&self);
}

/// In-memory diagnostic log backed by a mutex-guarded line list.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line. Safe to call from any thread.
    pub fn push(&self, line: impl Into<String>) {
        self.lines.lock().expect("diagnostic log poisoned").push(line.into());
    }
}

impl DiagnosticLog for MemoryLog {
    fn pending_lines(&self) -> Vec<String> {
        self.lines.lock().expect("diagnostic log poisoned").clone()
    }

    fn clear(&self) {
        self.lines.lock().expect("diagnostic log poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_drain() {
        let log = MemoryLog::new();
        log.push("breakpoint hit");
        log.push("var inspected");

        assert_eq!(log.pending_lines(), ["breakpoint hit", "var inspected"]);
        log.clear();
        assert!(log.pending_lines().is_empty());
    }
}
