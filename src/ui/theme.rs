//! Palette: maps Scroller color slots to ratatui styles.
//!
//! Slot 0 is reserved for the terminal default; slots 1-7 carry the classic
//! ANSI foreground colors on the default background. Match segments
//! additionally get the bold modifier.

use crate::scroller::{Segment, PALETTE_SIZE};
use ratatui::style::{Color, Modifier, Style};

/// Color slots plus the status line style.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Foreground per slot; `None` means the terminal default.
    slots: [Option<Color>; PALETTE_SIZE as usize],
    /// Status line style.
    pub status: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            slots: [
                None,
                Some(Color::Red),
                Some(Color::Green),
                Some(Color::Yellow),
                Some(Color::Blue),
                Some(Color::Magenta),
                Some(Color::Cyan),
                Some(Color::White),
            ],
            status: Style::default().bg(Color::Blue).fg(Color::White),
        }
    }
}

impl Palette {
    /// Palette for terminals without color support: matches are still
    /// distinguishable through the bold modifier alone.
    pub fn monochrome() -> Self {
        Self {
            slots: [None; PALETTE_SIZE as usize],
            status: Style::default()
                .bg(Color::Black)
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED),
        }
    }

    /// Style for one rendered segment.
    pub fn style_for(&self, segment: &Segment) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.slots[usize::from(segment.color) % self.slots.len()] {
            style = style.fg(color);
        }
        if segment.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(color: u8, bold: bool) -> Segment {
        Segment {
            text: "x".to_string(),
            color,
            bold,
        }
    }

    #[test]
    fn test_slot_zero_is_terminal_default() {
        let palette = Palette::default();
        let style = palette.style_for(&segment(0, false));
        assert_eq!(style.fg, None);
        assert!(!style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_colored_bold_match_segment() {
        let palette = Palette::default();
        let style = palette.style_for(&segment(1, true));
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_monochrome_keeps_bold_only() {
        let palette = Palette::monochrome();
        let style = palette.style_for(&segment(5, true));
        assert_eq!(style.fg, None);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
