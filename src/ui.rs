//! Terminal layer: raw-mode session resource, palette, key mapping, and the
//! render loop that drives the [`Scroller`](crate::scroller::Scroller).

pub mod events;
pub mod renderer;
pub mod terminal;
pub mod theme;

pub use events::{map_event, PagerCommand};
pub use renderer::run;
pub use terminal::TerminalSession;
pub use theme::Palette;
