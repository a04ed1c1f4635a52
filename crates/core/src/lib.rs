//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing for
//! the memory-matching game. It has **no dependencies** on the terminal or
//! any other I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical decks, round after round
//! - **Testable**: Time is virtual and driven by the caller
//! - **Portable**: Any front end can implement [`RenderSurface`]
//!
//! # Module Structure
//!
//! - [`rng`]: LCG plus Fisher-Yates shuffle and draw-without-replacement
//! - [`board`]: cards, decks, and the board generator
//! - [`clock`]: fixed-interval round clock
//! - [`scheduler`]: round-keyed deferred tasks (flip-back, win, restart)
//! - [`session`]: the state of one round and its immediate transitions
//! - [`game`]: controller owning the session, RNG, scheduler, and notifications
//! - [`surface`]: render surface contract and state-change events
//! - [`config`]: startup configuration
//!
//! # Game Rules
//!
//! - A round deals `dimension²` face-down cards, two of each symbol
//! - The first reveal of a round starts the clock
//! - Every reveal counts as one move
//! - A matching pair stays face-up; a mismatched pair flips back after 1s
//! - While a mismatched pair is showing, further clicks are ignored
//! - Matching the last pair wins: the clock stops, the banner shows after 1s,
//!   and a new round is dealt 1s later
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Game, GameConfig, SessionEvent};
//! use tui_memory_types::Phase;
//!
//! let mut game = Game::new(GameConfig::default(), 12345).unwrap();
//! assert_eq!(game.phase(), Phase::NotStarted);
//!
//! let first = game.card_ref(0);
//! assert_eq!(game.click(first), SessionEvent::Revealed { index: 0 });
//! assert_eq!(game.phase(), Phase::InProgress);
//!
//! // One second of frames.
//! for _ in 0..63 {
//!     game.tick(16);
//! }
//! assert_eq!(game.session().elapsed_seconds(), 1);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod game;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod surface;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{generate_board, Card, Deck};
pub use clock::Clock;
pub use config::GameConfig;
pub use game::Game;
pub use rng::{pick_random_distinct, shuffle, SimpleRng};
pub use scheduler::{DeferredTask, Scheduler};
pub use session::{Session, SessionEvent};
pub use surface::{GameEvent, RenderSurface};
