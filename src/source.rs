//! Line Source: turns the input file or a stdin pipe into the Document.
//!
//! The Document is the full, ordered, terminator-free line sequence; it is
//! read once here and then owned immutably by the `Scroller`. When the data
//! arrives on a pipe, stdin is drained to EOF before the render loop starts;
//! the keyboard is then sourced from `/dev/tty` by the crossterm event reader
//! (the modern equivalent of the classic dup-stdin-reopen-tty pager trick).

use crate::error::{PagerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};
use std::path::Path;

/// Read the whole Document from `path`, or from standard input when no path
/// is given.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| PagerError::io(format!("cannot open {}", path.display()), e))?;
    let lines = collect_lines(BufReader::new(file))?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

fn read_stdin() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(PagerError::io(
            "no input: pass a file argument or pipe data on stdin",
            std::io::Error::from(std::io::ErrorKind::InvalidInput),
        ));
    }
    let lines = collect_lines(stdin.lock())?;
    log::debug!("read {} lines from stdin", lines.len());
    Ok(lines)
}

fn collect_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map_err(|e| PagerError::io("failed reading input", e)))
        .collect()
}

/// Display name for the status line.
pub fn input_name(path: Option<&Path>) -> String {
    match path {
        Some(path) => path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string(),
        None => "(stdin)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file_splits_lines_without_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\r\nthird").unwrap();

        let lines = read_lines(Some(file.path())).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_lines(Some(Path::new("/no/such/file"))).unwrap_err();
        match err {
            PagerError::Io { .. } => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_input_name() {
        assert_eq!(input_name(Some(Path::new("/var/log/app.log"))), "app.log");
        assert_eq!(input_name(None), "(stdin)");
    }
}
