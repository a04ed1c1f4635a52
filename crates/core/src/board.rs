//! Board module - cards, decks, and dealing
//!
//! A deck is the full ordered set of cards for one round. Deck order is the
//! display order (row-major over a `dimension x dimension` grid); two cards
//! sharing a symbol form a pair regardless of where they sit.

use tracing::debug;

use crate::rng::{pick_random_distinct, shuffle, SimpleRng};
use crate::types::{DealError, Symbol};

/// One grid cell holding a single symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Whether the symbol should be shown (face-up or already matched)
    pub fn is_visible(&self) -> bool {
        self.face_up || self.matched
    }
}

/// Ordered cards of one round.
///
/// Always holds `dimension²` cards with every symbol present exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    dimension: u8,
    cards: Vec<Card>,
}

impl Deck {
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Number of cards not yet matched
    pub fn unmatched_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.matched).count()
    }

    /// True once every pair has been matched
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Indices of cards that are face-up but not matched
    pub fn face_up_unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.face_up && !c.matched)
            .map(|(i, _)| i)
    }

    /// Symbols in deck order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().map(|c| c.symbol)
    }
}

/// Number of distinct symbols a board of `dimension` needs.
pub fn pairs_for(dimension: u8) -> usize {
    (dimension as usize * dimension as usize) / 2
}

/// Check the grid dimension precondition.
pub fn check_dimension(dimension: u8) -> Result<(), DealError> {
    if dimension == 0 {
        return Err(DealError::InvalidArgument(
            "grid dimension must be positive".to_string(),
        ));
    }
    if dimension % 2 != 0 {
        return Err(DealError::InvalidArgument(format!(
            "grid dimension {} is odd; it must be even so every card has a pair",
            dimension
        )));
    }
    Ok(())
}

/// Deduplicate a pool, keeping the first occurrence of each symbol.
pub fn distinct_symbols(pool: &[Symbol]) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(pool.len());
    for &s in pool {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}

/// Deal a fresh deck of `dimension²` face-down cards.
///
/// Picks `dimension²/2` distinct symbols from `pool`, duplicates the pick and
/// shuffles the result.
pub fn generate_board(
    dimension: u8,
    pool: &[Symbol],
    rng: &mut SimpleRng,
) -> Result<Deck, DealError> {
    check_dimension(dimension)?;

    let pool = distinct_symbols(pool);
    let required = pairs_for(dimension);
    if pool.len() < required {
        return Err(DealError::InsufficientSymbols {
            required,
            available: pool.len(),
        });
    }

    let picks = pick_random_distinct(&pool, required, rng)?;
    let mut doubled = Vec::with_capacity(required * 2);
    doubled.extend_from_slice(&picks);
    doubled.extend_from_slice(&picks);

    let cards = shuffle(&doubled, rng).into_iter().map(Card::new).collect();
    debug!(dimension, pairs = required, "dealt board");

    Ok(Deck { dimension, cards })
}
