//! Key bindings.
//!
//! `q` quits; PageDown/PageUp and the arrow keys scroll. Every other key
//! falls back to "scroll down one line" — historical behavior that users
//! rely on, so it is preserved verbatim; the render loop records the key
//! code in the session log since the binding is undocumented.

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};

/// Command produced by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    Quit,
    PageUp,
    PageDown,
    LineUp,
    LineDown,
    /// Unrecognized key; scrolls down one line. Carries the code for the
    /// session log.
    Fallback(KeyCode),
}

/// Map a terminal event to a command. Key releases/repeats and non-key
/// events (resize, focus, ...) yield `None`: the loop just repaints.
pub fn map_event(event: &Event) -> Option<PagerCommand> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(match key.code {
            KeyCode::Char('q') => PagerCommand::Quit,
            KeyCode::PageDown => PagerCommand::PageDown,
            KeyCode::PageUp => PagerCommand::PageUp,
            KeyCode::Up => PagerCommand::LineUp,
            KeyCode::Down => PagerCommand::LineDown,
            code => PagerCommand::Fallback(code),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_documented_bindings() {
        assert_eq!(
            map_event(&press(KeyCode::Char('q'))),
            Some(PagerCommand::Quit)
        );
        assert_eq!(
            map_event(&press(KeyCode::PageDown)),
            Some(PagerCommand::PageDown)
        );
        assert_eq!(
            map_event(&press(KeyCode::PageUp)),
            Some(PagerCommand::PageUp)
        );
        assert_eq!(map_event(&press(KeyCode::Up)), Some(PagerCommand::LineUp));
        assert_eq!(
            map_event(&press(KeyCode::Down)),
            Some(PagerCommand::LineDown)
        );
    }

    #[test]
    fn test_any_other_key_is_fallback() {
        assert_eq!(
            map_event(&press(KeyCode::Char('x'))),
            Some(PagerCommand::Fallback(KeyCode::Char('x')))
        );
        assert_eq!(
            map_event(&press(KeyCode::Esc)),
            Some(PagerCommand::Fallback(KeyCode::Esc))
        );
    }

    #[test]
    fn test_key_release_and_resize_are_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(map_event(&release), None);
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
    }
}
