//! Append-only session debug log.
//!
//! The original design used a process-global logger; here the log is an
//! explicit handle created in `main` and owned by the `Scroller`, so its
//! lifetime is tied to the session. It records every scroll command and every
//! unrecognized key code, one line per event. Purely diagnostic: nothing
//! reads it back, and failure to open it must never abort the session.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Handle to the session debug log. Writes are flushed per event so the log
/// survives a crash mid-session.
#[derive(Debug)]
pub struct SessionLog {
    sink: Option<File>,
}

impl SessionLog {
    /// Open (appending) or create the log file at `path`.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { sink: Some(file) })
    }

    /// A log that discards every event. Used when the log file cannot be
    /// created; the session runs without diagnostics rather than failing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Record one event as a single line.
    pub fn event(&mut self, args: fmt::Arguments<'_>) {
        if let Some(ref mut file) = self.sink {
            // A failed diagnostic write is dropped on the floor.
            let _ = writeln!(file, "{args}");
            let _ = file.flush();
        }
    }

    /// Whether events are actually being written anywhere.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_append_one_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");

        let mut log = SessionLog::open(&path).unwrap();
        log.event(format_args!("scroll_down(1)"));
        log.event(format_args!("page_up"));
        drop(log);

        // Reopening appends rather than truncating.
        let mut log = SessionLog::open(&path).unwrap();
        log.event(format_args!("cmd=Esc"));
        drop(log);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["scroll_down(1)", "page_up", "cmd=Esc"]);
    }

    #[test]
    fn test_disabled_log_swallows_events() {
        let mut log = SessionLog::disabled();
        assert!(!log.is_enabled());
        log.event(format_args!("scroll_up(3)"));
    }
}
