//! Render loop and the frame-backed drawing surface.
//!
//! Each iteration repaints the whole viewport unconditionally (content rows
//! through the Scroller, then a one-row status line), flips the frame, and
//! blocks on the next key. The key read has no timeout by design: the pager
//! only leaves the loop on `q` or an unrecoverable terminal error.

use crate::error::{PagerError, Result};
use crate::scroller::{Canvas, RenderRow, Scroller};
use crate::ui::events::{map_event, PagerCommand};
use crate::ui::terminal::TerminalSession;
use crate::ui::theme::Palette;
use ratatui::crossterm::event;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// [`Canvas`] over a ratatui frame's content area.
///
/// Drawing a row outside the area is a [`PagerError::Render`]; the Scroller
/// reacts by abandoning the rest of the pass, which mirrors how a curses
/// write past the screen edge aborted the original paint loop.
pub struct FrameCanvas<'a, 'b> {
    frame: &'a mut Frame<'b>,
    area: Rect,
    palette: &'a Palette,
}

impl<'a, 'b> FrameCanvas<'a, 'b> {
    pub fn new(frame: &'a mut Frame<'b>, area: Rect, palette: &'a Palette) -> Self {
        Self {
            frame,
            area,
            palette,
        }
    }
}

impl Canvas for FrameCanvas<'_, '_> {
    fn draw_row(&mut self, row: u16, rendered: &RenderRow) -> Result<()> {
        if row >= self.area.height {
            return Err(PagerError::render(format!(
                "row {row} outside content area of {} rows",
                self.area.height
            )));
        }

        let spans: Vec<Span> = rendered
            .segments
            .iter()
            .filter(|seg| !seg.text.is_empty())
            .map(|seg| Span::styled(seg.text.clone(), self.palette.style_for(seg)))
            .collect();

        let row_area = Rect {
            x: self.area.x,
            y: self.area.y + row,
            width: self.area.width,
            height: 1,
        };
        self.frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        Ok(())
    }
}

/// Run the session: repaint, block on a key, dispatch, until quit.
pub fn run(
    session: &mut TerminalSession,
    scroller: &mut Scroller,
    input_name: &str,
    palette: &Palette,
) -> Result<()> {
    loop {
        session.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(frame.size());

            let mut canvas = FrameCanvas::new(frame, chunks[0], palette);
            scroller.paint(&mut canvas);

            render_status(frame, chunks[1], scroller, input_name, palette);
        })?;

        let event = event::read().map_err(|e| PagerError::terminal(format!("key read: {e}")))?;
        match map_event(&event) {
            Some(PagerCommand::Quit) => return Ok(()),
            Some(PagerCommand::PageDown) => scroller.page_down(),
            Some(PagerCommand::PageUp) => scroller.page_up(),
            Some(PagerCommand::LineUp) => scroller.scroll_up(1),
            Some(PagerCommand::LineDown) => scroller.scroll_down(1),
            Some(PagerCommand::Fallback(code)) => {
                scroller.record(format_args!("cmd={code:?}"));
                scroller.scroll_down(1);
            }
            None => {}
        }
    }
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    scroller: &Scroller,
    input_name: &str,
    palette: &Palette,
) {
    let status = format!("{} | {}", input_name, position_label(scroller));
    frame.render_widget(Paragraph::new(status).style(palette.status), area);
}

fn position_label(scroller: &Scroller) -> String {
    let (first, last) = scroller.viewport();
    let len = scroller.len();
    if len == 0 {
        "Empty".to_string()
    } else if last >= len {
        "END".to_string()
    } else {
        format!("{:.0}%", (first as f32 / len as f32) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_log::SessionLog;

    fn scroller(height: u16, len: usize) -> Scroller {
        let lines = (0..len).map(|i| format!("line {i}")).collect();
        Scroller::new(80, height, lines, None, SessionLog::disabled()).unwrap()
    }

    #[test]
    fn test_position_label_tracks_viewport() {
        let mut s = scroller(5, 100);
        assert_eq!(position_label(&s), "0%");
        s.scroll_down(50);
        assert_eq!(position_label(&s), "50%");
        s.scroll_down(1000);
        assert_eq!(position_label(&s), "END");
    }

    #[test]
    fn test_position_label_edge_documents() {
        let s = scroller(5, 0);
        assert_eq!(position_label(&s), "Empty");
        // Document shorter than one page sits at END from the start.
        let s = scroller(10, 3);
        assert_eq!(position_label(&s), "END");
    }
}
