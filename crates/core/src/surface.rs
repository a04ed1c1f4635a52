//! Render surface contract and state-change notifications
//!
//! The game never touches a display. It records [`GameEvent`]s as its state
//! changes; a front end drains them and replays them onto whatever implements
//! [`RenderSurface`].

use crate::board::{Card, Deck};

/// Something that can show a deck, counters, and a win banner.
pub trait RenderSurface {
    /// Remove every card element of the previous round.
    fn clear_board(&mut self);
    /// Show one hidden/visible element per card of `deck`.
    fn render_deck(&mut self, round: u32, deck: &Deck);
    /// Refresh a single card after it flipped or matched.
    fn update_card(&mut self, index: usize, card: &Card);
    fn set_moves(&mut self, moves: u32);
    fn set_elapsed(&mut self, seconds: u32);
    fn show_win(&mut self, moves: u32, seconds: u32);
    fn clear_win(&mut self);
}

/// A state change the render surface should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round was dealt (startup, restart, or after a win)
    RoundDealt { round: u32, deck: Deck },
    /// A card flipped, matched, or was hidden again
    CardChanged { index: usize, card: Card },
    MovesChanged(u32),
    ElapsedChanged(u32),
    /// Final totals of a won round
    Won { moves: u32, seconds: u32 },
}

impl GameEvent {
    pub fn apply_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            GameEvent::RoundDealt { round, deck } => {
                surface.clear_win();
                surface.clear_board();
                surface.render_deck(*round, deck);
                surface.set_moves(0);
                surface.set_elapsed(0);
            }
            GameEvent::CardChanged { index, card } => surface.update_card(*index, card),
            GameEvent::MovesChanged(moves) => surface.set_moves(*moves),
            GameEvent::ElapsedChanged(seconds) => surface.set_elapsed(*seconds),
            GameEvent::Won { moves, seconds } => surface.show_win(*moves, *seconds),
        }
    }
}
