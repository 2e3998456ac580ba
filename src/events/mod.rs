//! Terminal events and key hints.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::{EventHandler, TICK_RATE_MS};
pub use keys::{get_context_hints, get_keybindings_grouped, KeyContext};

/// An event delivered to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without input.
    Tick,
}
