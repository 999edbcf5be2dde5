//! The Scroller: viewport state, line painting, and match coloring.
//!
//! This is the core of the pager. It owns the Document (the immutable line
//! buffer), the viewport window `[first, last)`, the optional highlight
//! pattern, and the color table that maps matched text to palette slots.
//! Painting goes through the [`Canvas`] seam so the algorithm is independent
//! of the terminal backend, and so a single bad row can abort the rest of a
//! paint pass without touching rows already drawn.

use crate::error::{PagerError, Result};
use crate::session_log::SessionLog;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Number of color slots. Slot 0 is the terminal default; slots 1-7 carry
/// actual colors. The round-robin counter wraps modulo this size.
pub const PALETTE_SIZE: u8 = 8;

/// One styled run of text within a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Palette slot, `0..PALETTE_SIZE`. 0 renders with the default color.
    pub color: u8,
    pub bold: bool,
}

/// A rendered line: up to three segments (pre-match, match, post-match),
/// already clipped to the viewport width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderRow {
    pub segments: Vec<Segment>,
}

impl RenderRow {
    /// Concatenated text of all segments, ignoring styling.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Drawing surface for one paint pass. `row` is relative to the content area
/// (0 = top visible line). Implementations report an error for rows outside
/// the physical surface; the Scroller treats that as "stop painting".
pub trait Canvas {
    fn draw_row(&mut self, row: u16, rendered: &RenderRow) -> Result<()>;
}

/// Stable match-key coloring: the first time a key is seen it gets the next
/// round-robin slot, and keeps it for the rest of the session. Identical
/// matched text therefore always gets the identical color. With more than
/// `PALETTE_SIZE` distinct keys the counter wraps and colors repeat.
#[derive(Debug, Default)]
pub struct ColorTable {
    assigned: HashMap<String, u8>,
    next_slot: u8,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `key`, assigning the next round-robin slot on first sight.
    pub fn color_for(&mut self, key: &str) -> u8 {
        if let Some(&slot) = self.assigned.get(key) {
            return slot;
        }
        let slot = self.next_slot;
        self.next_slot = (self.next_slot + 1) % PALETTE_SIZE;
        self.assigned.insert(key.to_string(), slot);
        slot
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Viewport state plus painting and scrolling over an immutable Document.
#[derive(Debug)]
pub struct Scroller {
    lines: Vec<String>,
    width: usize,
    /// Content rows per page: viewport height minus the status row. Captured
    /// once at construction; scroll commands never re-measure the terminal.
    page_rows: usize,
    first: usize,
    last: usize,
    pattern: Option<Regex>,
    colors: ColorTable,
    log: SessionLog,
}

impl Scroller {
    /// Build a Scroller for a `width` x `height` terminal.
    ///
    /// The raw pattern is wrapped in an outer capture group before compiling,
    /// so group 1 always spans the entire user pattern no matter how the user
    /// grouped it. Compilation failure is reported as [`PagerError::Pattern`]
    /// and must be surfaced before the render loop starts.
    pub fn new(
        width: u16,
        height: u16,
        lines: Vec<String>,
        pattern: Option<&str>,
        log: SessionLog,
    ) -> Result<Self> {
        let pattern = match pattern {
            Some(raw) => {
                let wrapped = format!("({raw})");
                Some(Regex::new(&wrapped).map_err(|e| PagerError::pattern(raw, e))?)
            }
            None => None,
        };

        let page_rows = usize::from(height.saturating_sub(1));
        let last = page_rows.min(lines.len());

        Ok(Self {
            lines,
            width: usize::from(width),
            page_rows,
            first: 0,
            last,
            pattern,
            colors: ColorTable::new(),
            log,
        })
    }

    /// Current viewport as a half-open index range `(first, last)`.
    pub fn viewport(&self) -> (usize, usize) {
        (self.first, self.last)
    }

    /// Total lines in the Document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content rows per page, as captured at construction.
    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    /// Record a diagnostic event (the render loop uses this for key codes).
    pub fn record(&mut self, args: fmt::Arguments<'_>) {
        self.log.event(args);
    }

    /// Paint the visible slice onto `canvas`, top to bottom.
    ///
    /// The first row that fails to draw silently ends the pass: rows already
    /// drawn stand, later rows are skipped, and the next frame repaints from
    /// scratch. Partial frames are acceptable by contract.
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        for (row, idx) in (self.first..self.last).enumerate() {
            let rendered = render_line(
                self.pattern.as_ref(),
                &mut self.colors,
                self.width,
                &self.lines[idx],
            );
            if let Err(err) = canvas.draw_row(row as u16, &rendered) {
                self.log.event(format_args!("paint aborted at row {row}: {err}"));
                return;
            }
        }
    }

    /// Render a single line without drawing it. Exposed for the renderer's
    /// status line and for tests; mutates the color table like `paint` does.
    pub fn render_row(&mut self, line: &str) -> RenderRow {
        render_line(self.pattern.as_ref(), &mut self.colors, self.width, line)
    }

    /// Move the viewport down by up to `n` lines, clamping at end of
    /// Document. At the bottom (`last == len`) this is a no-op.
    pub fn scroll_down(&mut self, n: usize) {
        self.log.event(format_args!("scroll_down({n})"));
        let mut n = n;
        while n > 0 && self.last < self.lines.len() {
            self.first += 1;
            self.last += 1;
            n -= 1;
        }
    }

    /// Move the viewport up by up to `n` lines, clamping at the top. At the
    /// top (`first == 0`) this is a no-op.
    pub fn scroll_up(&mut self, n: usize) {
        self.log.event(format_args!("scroll_up({n})"));
        let mut n = n;
        while n > 0 && self.first > 0 {
            self.first -= 1;
            self.last -= 1;
            n -= 1;
        }
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.log.event(format_args!("page_down"));
        self.scroll_down(self.page_rows);
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.log.event(format_args!("page_up"));
        self.scroll_up(self.page_rows);
    }
}

/// Split one line into clipped, styled segments.
///
/// With a matching pattern the line becomes pre-match / match / post-match,
/// all three in the color assigned to the matched text and the middle one
/// bold. Each segment's width budget is the viewport width minus the columns
/// before it; once the budget is exhausted the segment and everything after
/// it are dropped, so the rendered width never exceeds the viewport width.
/// Only the first match on a line drives coloring.
fn render_line(
    pattern: Option<&Regex>,
    colors: &mut ColorTable,
    width: usize,
    line: &str,
) -> RenderRow {
    if let Some(re) = pattern {
        if let Some(m) = re.captures(line).and_then(|caps| caps.get(1)) {
            let color = colors.color_for(m.as_str());
            let (start, end) = (m.start(), m.end());
            let mut segments = Vec::with_capacity(3);

            segments.push(Segment {
                text: clip(&line[..start], width).to_string(),
                color,
                bold: false,
            });

            let used = line[..start].chars().count();
            if used >= width {
                return RenderRow { segments };
            }
            segments.push(Segment {
                text: clip(&line[start..end], width - used).to_string(),
                color,
                bold: true,
            });

            let used = line[..end].chars().count();
            if used >= width {
                return RenderRow { segments };
            }
            segments.push(Segment {
                text: clip(&line[end..], width - used).to_string(),
                color,
                bold: false,
            });

            return RenderRow { segments };
        }
    }

    RenderRow {
        segments: vec![Segment {
            text: clip(line, width).to_string(),
            color: 0,
            bold: false,
        }],
    }
}

/// First `budget` characters of `text` (fixed-width character counting).
fn clip(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
