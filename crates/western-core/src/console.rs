//! Line-oriented output sink used by cowboys.

use std::cell::RefCell;
use std::io::Write;

/// Destination for every line a cowboy speaks.
///
/// Saying a line never fails; implementations that can fail swallow the
/// error after logging it.
pub trait Console {
    fn say(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn say(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", line) {
            tracing::warn!("Failed to write to stdout: {}", e);
        }
    }
}

/// Keeps every line in memory, in the order it was said.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything said so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Number of recorded lines equal to `line`.
    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == line).count()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Console for RecordingConsole {
    fn say(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recording_console_keeps_order() {
        let console = RecordingConsole::new();
        assert!(console.is_empty());

        console.say("first");
        console.say("second");
        console.say("first");

        assert_eq!(console.lines(), vec!["first", "second", "first"]);
        assert_eq!(console.count("first"), 2);
        assert_eq!(console.count("third"), 0);
        assert_eq!(console.len(), 3);
    }
}
