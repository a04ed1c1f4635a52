//! Integration tests for full rounds driven through the game controller

use tui_memory::core::{Game, GameConfig, GameEvent, SessionEvent};
use tui_memory::types::{
    GameAction, Phase, Symbol, AUTO_RESTART_DELAY_MS, FLIP_BACK_DELAY_MS, TICK_MS,
    WIN_BANNER_DELAY_MS,
};

fn two_by_two() -> Game {
    Game::new(GameConfig::new(2, vec![Symbol::new('A'), Symbol::new('B')]), 31).unwrap()
}

fn partner(game: &Game, index: usize) -> usize {
    let cards = game.session().deck().cards();
    (0..cards.len())
        .find(|&i| i != index && cards[i].symbol == cards[index].symbol)
        .unwrap()
}

/// Run the frame loop for `ms` milliseconds of 16ms ticks.
fn run_frames(game: &mut Game, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        game.tick(step);
        left -= step;
    }
}

#[test]
fn test_two_by_two_round_to_auto_restart() {
    let mut game = two_by_two();
    let a = 0;
    let b = partner(&game, a);

    assert_eq!(game.click(game.card_ref(a)), SessionEvent::Revealed { index: a });
    let s = game.session();
    assert_eq!(s.revealed_count(), 1);
    assert_eq!(s.total_moves(), 1);
    assert!(s.started());
    assert!(s.clock_running());

    assert!(matches!(
        game.click(game.card_ref(b)),
        SessionEvent::Matched { won: false, .. }
    ));
    assert_eq!(game.session().revealed_count(), 0);

    let c = (0..4).find(|&i| i != a && i != b).unwrap();
    let d = partner(&game, c);
    game.click(game.card_ref(c));
    assert!(matches!(
        game.click(game.card_ref(d)),
        SessionEvent::Matched { won: true, .. }
    ));
    assert_eq!(game.phase(), Phase::Won);
    assert!(!game.session().clock_running());

    run_frames(&mut game, WIN_BANNER_DELAY_MS);
    assert_eq!(game.win_banner(), Some((4, 0)));

    run_frames(&mut game, AUTO_RESTART_DELAY_MS);
    assert_eq!(game.round_id(), 1);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.session().deck().len(), 4);
    assert!(game.session().deck().cards().iter().all(|c| !c.face_up));
}

#[test]
fn test_mismatch_scenario() {
    let mut game = two_by_two();
    let cards = game.session().deck().cards().to_vec();
    let b = (1..4).find(|&i| cards[i].symbol != cards[0].symbol).unwrap();

    game.click(game.card_ref(0));
    assert!(matches!(
        game.click(game.card_ref(b)),
        SessionEvent::Mismatched { .. }
    ));

    run_frames(&mut game, FLIP_BACK_DELAY_MS / 2);
    assert!(game.session().deck().card(0).unwrap().face_up);
    assert!(game.session().deck().card(b).unwrap().face_up);

    run_frames(&mut game, FLIP_BACK_DELAY_MS / 2);
    let s = game.session();
    assert!(!s.deck().card(0).unwrap().face_up);
    assert!(!s.deck().card(b).unwrap().face_up);
    assert_eq!(s.revealed_count(), 0);
    assert_eq!(s.total_moves(), 2);
}

#[test]
fn test_timer_tracks_play_time() {
    let mut game = Game::new(GameConfig::default(), 1).unwrap();
    game.click(game.card_ref(0));
    run_frames(&mut game, 3_200);
    assert_eq!(game.session().elapsed_seconds(), 3);
}

#[test]
fn test_restart_mid_round_discards_everything() {
    let mut game = Game::new(GameConfig::default(), 2).unwrap();
    let cards = game.session().deck().cards().to_vec();
    let b = (1..16).find(|&i| cards[i].symbol != cards[0].symbol).unwrap();
    game.click(game.card_ref(0));
    game.click(game.card_ref(b));
    run_frames(&mut game, 500);

    assert!(game.apply_action(GameAction::Restart));
    let s = game.session();
    assert_eq!(s.total_moves(), 0);
    assert_eq!(s.elapsed_seconds(), 0);
    assert!(!s.started());
    assert_eq!(game.pending_tasks(), 0);

    // Nothing from the old round fires later.
    game.drain_events();
    run_frames(&mut game, 2 * FLIP_BACK_DELAY_MS);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_notifications_for_a_won_round() {
    let mut game = two_by_two();
    game.drain_events();

    for i in 0..4 {
        if !game.session().deck().card(i).unwrap().matched {
            let j = partner(&game, i);
            game.click(game.card_ref(i));
            game.click(game.card_ref(j));
        }
    }
    run_frames(&mut game, WIN_BANNER_DELAY_MS + AUTO_RESTART_DELAY_MS);

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::MovesChanged(4)));
    assert!(events.contains(&GameEvent::Won { moves: 4, seconds: 0 }));
    assert!(matches!(
        events.last(),
        Some(GameEvent::RoundDealt { round: 1, .. })
    ));
}
