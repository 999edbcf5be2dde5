//! Error types for rxless.
//!
//! One `thiserror` enum covers the whole taxonomy: pattern compilation errors
//! caught before the session starts, recoverable per-line render errors, and
//! fatal I/O or terminal failures. `anyhow` is used only at the `main`
//! boundary for reporting.

use thiserror::Error;

/// The main error type for rxless operations.
#[derive(Error, Debug)]
pub enum PagerError {
    /// Invalid regular expression supplied via `--regex`. Detected at
    /// `Scroller` construction, before the terminal enters raw mode.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A single line failed to render (e.g. a row outside the screen).
    /// Recovered locally: the paint pass stops and the next frame retries.
    #[error("render failed: {message}")]
    Render { message: String },

    /// Failure opening or reading the input file/stream. Fatal; reported
    /// before raw mode entry.
    #[error("input error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Raw-mode or drawing failures from the terminal backend.
    #[error("terminal error: {message}")]
    Terminal { message: String },
}

/// Standard Result type for rxless operations.
pub type Result<T> = std::result::Result<T, PagerError>;

impl PagerError {
    /// Create a Pattern error from the raw user pattern and the regex error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a Render error with a descriptive message
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a Terminal error with a descriptive message
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PagerError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found",
            std::io::ErrorKind::PermissionDenied => "permission denied",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let bad = regex::Regex::new("(").unwrap_err();
        let pattern_err = PagerError::pattern("(", bad);
        assert!(pattern_err.to_string().starts_with("invalid pattern '('"));

        let render_err = PagerError::render("row 40 outside viewport");
        assert_eq!(
            render_err.to_string(),
            "render failed: row 40 outside viewport"
        );

        let term_err = PagerError::terminal("raw mode unavailable");
        assert_eq!(term_err.to_string(), "terminal error: raw mode unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PagerError = io_err.into();

        match err {
            PagerError::Io { message, .. } => assert_eq!(message, "file not found"),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(returns_result().unwrap(), 7);
    }
}
