//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with crossterm.
//!
//! The pieces line up with the core's render surface contract:
//! - [`BoardSurface`] implements `RenderSurface` and keeps what the game told it
//! - [`GameView`] draws a `BoardSurface` into a [`FrameBuffer`] and maps mouse
//!   positions back to card references
//! - [`TerminalRenderer`] writes frames to the terminal, diffing against the last

pub mod board_surface;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use board_surface::BoardSurface;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, GridLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
