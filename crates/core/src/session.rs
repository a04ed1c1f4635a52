//! Session module - state of a single round
//!
//! A session owns the deck, the move/time counters, the pending pair and the
//! round clock. It only performs immediate transitions; anything that happens
//! "later" (flip-back, win banner, next round) is scheduled by
//! [`Game`](crate::game::Game), which replaces the session wholesale on reset.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::{generate_board, Deck};
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::types::{DealError, Phase};

/// Immediate outcome of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Click had no effect
    Ignored,
    /// First card of a pair turned face-up
    Revealed { index: usize },
    /// Second card matched the first; `won` is set when it was the last pair
    Matched {
        first: usize,
        second: usize,
        won: bool,
    },
    /// Second card differs; both stay face-up until flipped back
    Mismatched { first: usize, second: usize },
}

#[derive(Debug, Clone)]
pub struct Session {
    round_id: u32,
    deck: Deck,
    /// Face-up, unmatched cards in reveal order.
    revealed: ArrayVec<usize, 2>,
    total_moves: u32,
    elapsed_seconds: u32,
    started: bool,
    won: bool,
    clock: Clock,
}

impl Session {
    /// Deal a fresh round: all cards hidden, counters zeroed, clock idle.
    pub fn new(
        config: &GameConfig,
        rng: &mut SimpleRng,
        round_id: u32,
    ) -> Result<Self, DealError> {
        let deck = generate_board(config.dimension, &config.symbols, rng)?;
        info!(round_id, dimension = config.dimension, "new round");
        Ok(Self {
            round_id,
            deck,
            revealed: ArrayVec::new(),
            total_moves: 0,
            elapsed_seconds: 0,
            started: false,
            won: false,
            clock: Clock::default(),
        })
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.started {
            Phase::InProgress
        } else {
            Phase::NotStarted
        }
    }

    /// Reveal the card at `index`.
    pub fn on_card_clicked(&mut self, index: usize) -> SessionEvent {
        if self.won || self.revealed.is_full() {
            debug!(index, "click ignored: pair pending or round over");
            return SessionEvent::Ignored;
        }

        let Some(card) = self.deck.card_mut(index) else {
            debug!(index, "click ignored: no such card");
            return SessionEvent::Ignored;
        };
        // A face-up card is either matched or already pending; neither counts as a move.
        if card.matched || card.face_up {
            debug!(index, "click ignored: card already showing");
            return SessionEvent::Ignored;
        }

        card.face_up = true;
        self.revealed.push(index);
        self.total_moves += 1;

        if !self.started {
            self.started = true;
            self.clock.start();
        }

        if !self.revealed.is_full() {
            debug!(index, moves = self.total_moves, "card revealed");
            return SessionEvent::Revealed { index };
        }

        let (first, second) = (self.revealed[0], self.revealed[1]);
        let cards = self.deck.cards();
        if cards[first].symbol != cards[second].symbol {
            debug!(first, second, "mismatch");
            return SessionEvent::Mismatched { first, second };
        }

        for i in [first, second] {
            if let Some(card) = self.deck.card_mut(i) {
                card.matched = true;
            }
        }
        self.revealed.clear();

        let won = self.deck.is_cleared();
        if won {
            self.won = true;
            self.clock.stop();
            info!(
                round_id = self.round_id,
                moves = self.total_moves,
                seconds = self.elapsed_seconds,
                "round won"
            );
        } else {
            debug!(first, second, "match");
        }

        SessionEvent::Matched { first, second, won }
    }

    /// Turn the pending mismatched pair face-down again.
    ///
    /// Returns the hidden indices, or `None` if no full pair was pending.
    pub fn flip_back(&mut self) -> Option<(usize, usize)> {
        if !self.revealed.is_full() {
            return None;
        }
        let (first, second) = (self.revealed[0], self.revealed[1]);
        for i in [first, second] {
            if let Some(card) = self.deck.card_mut(i) {
                card.face_up = false;
            }
        }
        self.revealed.clear();
        debug!(first, second, "flipped back");
        Some((first, second))
    }

    /// Advance the round clock, returning the number of seconds that passed.
    pub fn advance_clock(&mut self, elapsed_ms: u32) -> u32 {
        let ticks = self.clock.advance(elapsed_ms);
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(ticks);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Symbol, DEFAULT_SYMBOLS};

    fn session(dimension: u8, seed: u32) -> Session {
        let config = GameConfig::new(dimension, DEFAULT_SYMBOLS.to_vec());
        Session::new(&config, &mut SimpleRng::new(seed), 0).unwrap()
    }

    /// Indices of the two cards showing `symbol`.
    fn pair_of(s: &Session, symbol: Symbol) -> (usize, usize) {
        let mut it = s
            .deck()
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == symbol)
            .map(|(i, _)| i);
        (it.next().unwrap(), it.next().unwrap())
    }

    /// One index from each of two different pairs.
    fn mismatched_pair(s: &Session) -> (usize, usize) {
        let cards = s.deck().cards();
        let second = (1..cards.len())
            .find(|&i| cards[i].symbol != cards[0].symbol)
            .unwrap();
        (0, second)
    }

    #[test]
    fn test_new_session() {
        let s = session(4, 1);
        assert_eq!(s.phase(), Phase::NotStarted);
        assert!(!s.started());
        assert_eq!(s.total_moves(), 0);
        assert_eq!(s.elapsed_seconds(), 0);
        assert_eq!(s.revealed_count(), 0);
        assert!(!s.clock_running());
        assert_eq!(s.deck().len(), 16);
    }

    #[test]
    fn test_first_click_starts_round() {
        let mut s = session(4, 1);
        assert_eq!(s.on_card_clicked(3), SessionEvent::Revealed { index: 3 });

        assert!(s.started());
        assert!(s.clock_running());
        assert_eq!(s.phase(), Phase::InProgress);
        assert_eq!(s.revealed_count(), 1);
        assert_eq!(s.total_moves(), 1);
        assert!(s.deck().card(3).unwrap().face_up);
    }

    #[test]
    fn test_match_marks_both_and_clears_pending() {
        let mut s = session(4, 2);
        let symbol = s.deck().card(0).unwrap().symbol;
        let (a, b) = pair_of(&s, symbol);

        s.on_card_clicked(a);
        let ev = s.on_card_clicked(b);

        assert_eq!(
            ev,
            SessionEvent::Matched {
                first: a,
                second: b,
                won: false
            }
        );
        assert_eq!(s.revealed_count(), 0);
        assert!(s.deck().card(a).unwrap().matched);
        assert!(s.deck().card(b).unwrap().matched);
        assert_eq!(s.total_moves(), 2);
    }

    #[test]
    fn test_mismatch_keeps_pair_pending_until_flip_back() {
        let mut s = session(4, 3);
        let (a, b) = mismatched_pair(&s);

        s.on_card_clicked(a);
        assert_eq!(
            s.on_card_clicked(b),
            SessionEvent::Mismatched {
                first: a,
                second: b
            }
        );
        assert_eq!(s.revealed_count(), 2);
        assert!(s.deck().card(a).unwrap().face_up);
        assert!(s.deck().card(b).unwrap().face_up);

        assert_eq!(s.flip_back(), Some((a, b)));
        assert_eq!(s.revealed_count(), 0);
        assert!(!s.deck().card(a).unwrap().face_up);
        assert!(!s.deck().card(b).unwrap().face_up);
        assert_eq!(s.total_moves(), 2);
    }

    #[test]
    fn test_third_click_blocked_while_pair_pending() {
        let mut s = session(4, 4);
        let (a, b) = mismatched_pair(&s);
        s.on_card_clicked(a);
        s.on_card_clicked(b);

        let other = (0..16).find(|&i| i != a && i != b).unwrap();
        assert_eq!(s.on_card_clicked(other), SessionEvent::Ignored);
        assert!(!s.deck().card(other).unwrap().face_up);
        assert_eq!(s.total_moves(), 2);
    }

    #[test]
    fn test_reclick_on_face_up_card_is_ignored() {
        let mut s = session(4, 5);
        s.on_card_clicked(7);
        assert_eq!(s.on_card_clicked(7), SessionEvent::Ignored);
        assert_eq!(s.revealed_count(), 1);
        assert_eq!(s.total_moves(), 1);
    }

    #[test]
    fn test_click_on_matched_card_is_ignored() {
        let mut s = session(4, 6);
        let symbol = s.deck().card(0).unwrap().symbol;
        let (a, b) = pair_of(&s, symbol);
        s.on_card_clicked(a);
        s.on_card_clicked(b);

        assert_eq!(s.on_card_clicked(a), SessionEvent::Ignored);
        assert_eq!(s.total_moves(), 2);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let mut s = session(2, 1);
        assert_eq!(s.on_card_clicked(4), SessionEvent::Ignored);
        assert!(!s.started());
        assert_eq!(s.total_moves(), 0);
    }

    #[test]
    fn test_last_match_wins_and_stops_clock() {
        let mut s = session(2, 9);
        s.on_card_clicked(0);
        s.advance_clock(2_500);

        let other = (1..4)
            .find(|&i| s.deck().card(i).unwrap().symbol == s.deck().card(0).unwrap().symbol)
            .unwrap();
        s.on_card_clicked(other);
        let rest: Vec<usize> = (1..4).filter(|&i| i != other).collect();
        s.on_card_clicked(rest[0]);
        let ev = s.on_card_clicked(rest[1]);

        assert!(matches!(ev, SessionEvent::Matched { won: true, .. }));
        assert_eq!(s.phase(), Phase::Won);
        assert!(!s.clock_running());
        assert_eq!(s.elapsed_seconds(), 2);
        assert_eq!(s.advance_clock(5_000), 0);
        assert_eq!(s.on_card_clicked(0), SessionEvent::Ignored);
    }

    #[test]
    fn test_at_most_two_face_up_unmatched() {
        let mut s = session(4, 10);
        for i in 0..16 {
            s.on_card_clicked(i);
            let up = s.deck().face_up_unmatched().count();
            assert!(up <= 2);
            assert_eq!(up, s.revealed_count());
            if s.revealed_count() == 2 {
                s.flip_back();
            }
        }
    }

    #[test]
    fn test_flip_back_without_pair_is_noop() {
        let mut s = session(4, 11);
        assert_eq!(s.flip_back(), None);
        s.on_card_clicked(0);
        assert_eq!(s.flip_back(), None);
        assert!(s.deck().card(0).unwrap().face_up);
    }

    #[test]
    fn test_clock_only_runs_after_start() {
        let mut s = session(4, 12);
        assert_eq!(s.advance_clock(3_000), 0);
        s.on_card_clicked(0);
        assert_eq!(s.advance_clock(3_000), 3);
        assert_eq!(s.elapsed_seconds(), 3);
    }
}
