//! Game controller - owns the live session and everything that outlives it
//!
//! The controller holds the configuration, the RNG (shared across rounds so
//! consecutive decks differ), the deferred task queue and the notification
//! queue. It is the only owner of the current [`Session`] and swaps in a new
//! one on every reset.
//!
//! Time is virtual: the host calls [`Game::tick`] with the elapsed
//! milliseconds of each frame, which drives both the round clock and the
//! deferred tasks.

use tracing::{debug, error};

use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::scheduler::{DeferredTask, Scheduler};
use crate::session::{Session, SessionEvent};
use crate::surface::{GameEvent, RenderSurface};
use crate::types::{
    CardRef, DealError, GameAction, Phase, AUTO_RESTART_DELAY_MS, FLIP_BACK_DELAY_MS,
    WIN_BANNER_DELAY_MS,
};

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: SimpleRng,
    session: Session,
    scheduler: Scheduler,
    events: Vec<GameEvent>,
    now_ms: u64,
    /// Final (moves, seconds) once the win banner is showing.
    win_banner: Option<(u32, u32)>,
}

impl Game {
    /// Validate `config` and deal the first round.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, DealError> {
        config.validate()?;

        let mut rng = SimpleRng::new(seed);
        let session = Session::new(&config, &mut rng, 0)?;
        let mut game = Self {
            config,
            rng,
            session,
            scheduler: Scheduler::new(),
            events: Vec::new(),
            now_ms: 0,
            win_banner: None,
        };
        game.push_round_dealt();
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn round_id(&self) -> u32 {
        self.session.round_id()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn win_banner(&self) -> Option<(u32, u32)> {
        self.win_banner
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Reference to card `index` of the current round.
    pub fn card_ref(&self, index: usize) -> CardRef {
        CardRef::new(self.session.round_id(), index)
    }

    /// Handle a click on a rendered card.
    ///
    /// References from an earlier round are ignored.
    pub fn click(&mut self, card: CardRef) -> SessionEvent {
        if card.round != self.session.round_id() {
            debug!(
                card_round = card.round,
                round = self.session.round_id(),
                "click ignored: stale card reference"
            );
            return SessionEvent::Ignored;
        }

        let event = self.session.on_card_clicked(card.index);
        match event {
            SessionEvent::Ignored => {}
            SessionEvent::Revealed { index } => {
                self.push_card(index);
                self.push_moves();
            }
            SessionEvent::Matched {
                first,
                second,
                won,
            } => {
                self.push_card(first);
                self.push_card(second);
                self.push_moves();
                if won {
                    self.schedule(self.now_ms, WIN_BANNER_DELAY_MS, DeferredTask::ShowWin);
                }
            }
            SessionEvent::Mismatched { second, .. } => {
                self.push_card(second);
                self.push_moves();
                self.schedule(self.now_ms, FLIP_BACK_DELAY_MS, DeferredTask::FlipBack);
            }
        }
        event
    }

    /// Advance virtual time by `elapsed_ms`: tick the round clock, then run
    /// every deferred task that has come due.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;

        if self.session.advance_clock(elapsed_ms) > 0 {
            self.events
                .push(GameEvent::ElapsedChanged(self.session.elapsed_seconds()));
        }

        while let Some(item) = self.scheduler.pop_due(self.now_ms, self.session.round_id()) {
            self.run_task(item.task, item.due_ms);
        }
    }

    /// Throw the current round away and deal a new one.
    ///
    /// Cancels every pending task so nothing scheduled by the old round can
    /// touch the new one.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();

        let round = self.session.round_id().wrapping_add(1);
        match Session::new(&self.config, &mut self.rng, round) {
            Ok(session) => self.session = session,
            Err(err) => {
                // Config was validated in `new`, so dealing cannot fail here.
                error!(%err, "failed to deal a new round");
                return;
            }
        }

        self.win_banner = None;
        self.push_round_dealt();
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(card) => self.click(card) != SessionEvent::Ignored,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Take every notification recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replay pending notifications onto `surface`.
    pub fn flush_to<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        for event in self.drain_events() {
            event.apply_to(surface);
        }
    }

    fn run_task(&mut self, task: DeferredTask, due_ms: u64) {
        match task {
            DeferredTask::FlipBack => {
                if let Some((first, second)) = self.session.flip_back() {
                    self.push_card(first);
                    self.push_card(second);
                }
            }
            DeferredTask::ShowWin => {
                let moves = self.session.total_moves();
                let seconds = self.session.elapsed_seconds();
                self.win_banner = Some((moves, seconds));
                self.events.push(GameEvent::Won { moves, seconds });
                // Chain from the due time so large frames keep the same cadence.
                self.schedule(due_ms, AUTO_RESTART_DELAY_MS, DeferredTask::AutoRestart);
            }
            DeferredTask::AutoRestart => self.reset(),
        }
    }

    fn schedule(&mut self, from_ms: u64, delay_ms: u32, task: DeferredTask) {
        self.scheduler
            .schedule(from_ms, delay_ms, self.session.round_id(), task);
    }

    fn push_card(&mut self, index: usize) {
        if let Some(card) = self.session.deck().card(index) {
            self.events.push(GameEvent::CardChanged { index, card: *card });
        }
    }

    fn push_moves(&mut self) {
        self.events
            .push(GameEvent::MovesChanged(self.session.total_moves()));
    }

    fn push_round_dealt(&mut self) {
        self.events.push(GameEvent::RoundDealt {
            round: self.session.round_id(),
            deck: self.session.deck().clone(),
        });
    }
}
