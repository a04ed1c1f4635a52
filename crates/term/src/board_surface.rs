//! BoardSurface: the terminal's copy of what the game has told it to show.
//!
//! The game pushes notifications through [`RenderSurface`]; this type records
//! them so [`GameView`](crate::game_view::GameView) can draw a frame at any
//! time without reaching into the game's state.

use crate::core::{Card, Deck, RenderSurface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSurface {
    round: u32,
    dimension: u8,
    cards: Vec<Card>,
    moves: u32,
    elapsed: u32,
    win: Option<(u32, u32)>,
    /// Bumped on every change; lets the loop skip redundant frames.
    revision: u64,
}

impl BoardSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn win(&self) -> Option<(u32, u32)> {
        self.win
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl RenderSurface for BoardSurface {
    fn clear_board(&mut self) {
        self.cards.clear();
        self.dimension = 0;
        self.touch();
    }

    fn render_deck(&mut self, round: u32, deck: &Deck) {
        self.round = round;
        self.dimension = deck.dimension();
        self.cards.clear();
        self.cards.extend_from_slice(deck.cards());
        self.touch();
    }

    fn update_card(&mut self, index: usize, card: &Card) {
        if let Some(slot) = self.cards.get_mut(index) {
            *slot = *card;
            self.touch();
        }
    }

    fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
        self.touch();
    }

    fn set_elapsed(&mut self, seconds: u32) {
        self.elapsed = seconds;
        self.touch();
    }

    fn show_win(&mut self, moves: u32, seconds: u32) {
        self.win = Some((moves, seconds));
        self.touch();
    }

    fn clear_win(&mut self) {
        self.win = None;
        self.touch();
    }
}
