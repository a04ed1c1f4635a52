//! Terminal memory game runner (default binary).
//!
//! Single-threaded fixed-timestep loop: poll terminal input until the next
//! tick, feed clicks to the game, advance the game's virtual time, and redraw
//! when the board surface changed.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_memory::core::config::seed_from_env;
use tui_memory::core::{Game, GameConfig};
use tui_memory::input::{handle_key_event, should_quit, GridCursor};
use tui_memory::term::{BoardSurface, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, KeyAction, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    // Bad configuration is reported before the terminal is touched.
    let config = GameConfig::from_env().context("invalid game configuration")?;
    let seed = seed_from_env();
    let game = Game::new(config, seed).context("invalid game configuration")?;
    info!(seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `MEMORY_LOG_PATH` when set; stdout belongs to the game screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("MEMORY_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot open log file {}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let view = GameView::default();
    let mut surface = BoardSurface::new();
    let mut cursor = GridCursor::new(game.config().dimension);
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut drawn: Option<(u64, usize, Viewport)> = None;

    loop {
        game.flush_to(&mut surface);
        if surface.dimension() > 0 && surface.dimension() != cursor.dimension() {
            cursor.resize(surface.dimension());
        }

        // Render only when something visible changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let frame = (surface.revision(), cursor.index(), viewport);
        if drawn != Some(frame) {
            view.render_into(&surface, Some(cursor.index()), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(frame);
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyAction::Move(direction)) => cursor.step(direction),
                        Some(KeyAction::FlipSelected) => {
                            let card = game.card_ref(cursor.index());
                            game.apply_action(GameAction::Flip(card));
                        }
                        Some(KeyAction::Restart) => {
                            game.apply_action(GameAction::Restart);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(card) = view.hit_test(&surface, viewport, mouse.column, mouse.row) {
                        cursor.select(card.index);
                        game.apply_action(GameAction::Flip(card));
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
