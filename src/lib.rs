//! # rxless - a terminal pager with regexp colorizing
//!
//! Displays a file (or stdin) in a fixed terminal viewport, scrolls with the
//! keyboard, and highlights the first match of `--regex` on each line. Lines
//! whose matched text is identical are colored identically, so recurring
//! values (thread ids, log levels, request ids) line up visually.
//!
//! ## Architecture
//!
//! - [`scroller`] - the core: viewport state, line painting, color assignment
//! - [`source`] - reads the Document from a file or a stdin pipe
//! - [`session_log`] - append-only session debug log
//! - [`ui`] - terminal session resource, key bindings, render loop
//! - [`error`] - centralized error types

pub mod error;
pub mod scroller;
pub mod session_log;
pub mod source;
pub mod ui;

pub use error::{PagerError, Result};
pub use scroller::{Canvas, ColorTable, RenderRow, Scroller, Segment, PALETTE_SIZE};
pub use session_log::SessionLog;
pub use ui::{Palette, TerminalSession};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
