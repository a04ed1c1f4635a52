//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::KeyAction`] and tracks the
//! selection cursor that turns "flip the selected card" into a card index.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
