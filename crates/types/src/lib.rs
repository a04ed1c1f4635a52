//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no dependency on the game loop, the terminal,
//! or the RNG, so they can be shared by the core, the input mapping, and the
//! renderer.
//!
//! # Grid
//!
//! The board is a square of `dimension x dimension` cards. The dimension must
//! be even and positive so the deck divides evenly into pairs. Cards are laid
//! out row-major: cell `(row, col)` holds deck index `row * dimension + col`.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the frame loop |
//! | `CLOCK_TICK_MS` | 1000 | One elapsed-time step of the round clock |
//! | `FLIP_BACK_DELAY_MS` | 1000 | How long a mismatched pair stays visible |
//! | `WIN_BANNER_DELAY_MS` | 1000 | Delay between the winning match and the banner |
//! | `AUTO_RESTART_DELAY_MS` | 1000 | Delay between the banner and the next round |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardRef, Symbol, DEFAULT_DIMENSION, DEFAULT_SYMBOLS};
//!
//! let cherry = Symbol::new('🍒');
//! assert_eq!(cherry.to_string(), "🍒");
//! assert!(DEFAULT_SYMBOLS.contains(&cherry));
//!
//! let card = CardRef::new(0, 5);
//! assert_eq!(card.index, 5);
//! assert_eq!(DEFAULT_DIMENSION, 4);
//! ```

use std::fmt;

use thiserror::Error;

/// Default grid dimension (4x4 = 8 pairs)
pub const DEFAULT_DIMENSION: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Round clock interval (1 second per elapsed-time step)
pub const CLOCK_TICK_MS: u32 = 1000;

/// Mismatched pair stays face-up this long before flipping back
pub const FLIP_BACK_DELAY_MS: u32 = 1000;

/// Delay between the winning match and the win banner
pub const WIN_BANNER_DELAY_MS: u32 = 1000;

/// Delay between the win banner and the automatic new round
pub const AUTO_RESTART_DELAY_MS: u32 = 1000;

/// Default symbol pool (ten food glyphs, enough for a 4x4 board)
pub const DEFAULT_SYMBOLS: [Symbol; 10] = [
    Symbol('🥔'),
    Symbol('🍒'),
    Symbol('🥑'),
    Symbol('🌽'),
    Symbol('🥕'),
    Symbol('🍇'),
    Symbol('🍉'),
    Symbol('🍌'),
    Symbol('🥭'),
    Symbol('🍍'),
];

/// The matching unit printed on a card face.
///
/// Symbols are only ever compared for equality; position in the pool carries
/// no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    pub fn glyph(&self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(glyph: char) -> Self {
        Self(glyph)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a card as seen by a render surface.
///
/// `round` is the id of the round whose deck was rendered when the reference
/// was produced. References from an earlier round are ignored by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRef {
    pub round: u32,
    pub index: usize,
}

impl CardRef {
    pub fn new(round: u32, index: usize) -> Self {
        Self { round, index }
    }
}

/// Lifecycle of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh deck, clock idle, no card revealed yet
    NotStarted,
    /// At least one card revealed, clock running
    InProgress,
    /// Every pair matched, clock stopped
    Won,
}

/// Cursor movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Actions produced by the keyboard mapping
///
/// These are UI-level intents; `FlipSelected` is resolved against the cursor
/// position before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the selection cursor one cell
    Move(Direction),
    /// Flip the card under the cursor
    FlipSelected,
    /// Throw away the current round and deal a new one
    Restart,
}

/// Game actions that can be applied to the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the referenced card
    Flip(CardRef),
    /// Restart the game (at any time)
    Restart,
}

/// Errors raised while dealing a board.
///
/// Both are configuration errors: they surface before a round begins and
/// never in the middle of one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// Odd or zero grid dimension, or a pick larger than its pool
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Pool holds fewer distinct symbols than the board has pairs
    #[error("insufficient symbols: board needs {required} distinct symbols, pool has {available}")]
    InsufficientSymbols { required: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timing_defaults() {
        assert_eq!(CLOCK_TICK_MS, 1000);
        assert_eq!(FLIP_BACK_DELAY_MS, 1000);
        assert_eq!(WIN_BANNER_DELAY_MS, 1000);
        assert_eq!(AUTO_RESTART_DELAY_MS, 1000);
    }

    #[test]
    fn default_pool_covers_default_board() {
        let pairs = (DEFAULT_DIMENSION as usize * DEFAULT_DIMENSION as usize) / 2;
        assert!(DEFAULT_SYMBOLS.len() >= pairs);

        for (i, a) in DEFAULT_SYMBOLS.iter().enumerate() {
            for b in &DEFAULT_SYMBOLS[i + 1..] {
                assert_ne!(a, b, "duplicate symbol in default pool");
            }
        }
    }

    #[test]
    fn deal_error_messages() {
        let err = DealError::InsufficientSymbols {
            required: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient symbols: board needs 8 distinct symbols, pool has 3"
        );
        assert_eq!(
            DealError::InvalidArgument("dimension 3 is odd".into()).to_string(),
            "invalid argument: dimension 3 is odd"
        );
    }
}
