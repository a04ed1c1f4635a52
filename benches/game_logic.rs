use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{generate_board, Game, GameConfig, SimpleRng};
use tui_memory::term::{BoardSurface, GameView, Viewport};
use tui_memory::types::{Symbol, DEFAULT_SYMBOLS, TICK_MS};

fn bench_generate_board(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_board_4x4", |b| {
        b.iter(|| generate_board(black_box(4), &DEFAULT_SYMBOLS, &mut rng))
    });

    let pool: Vec<Symbol> = (0x4e00u32..0x4e00 + 200)
        .filter_map(char::from_u32)
        .map(Symbol::new)
        .collect();
    c.bench_function("generate_board_16x16", |b| {
        b.iter(|| generate_board(black_box(16), &pool, &mut rng))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), 12345).unwrap();
    game.click(game.card_ref(0));

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(TICK_MS));
            game.drain_events();
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("play_round_4x4", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::default(), 7).unwrap();
            let cards = game.session().deck().cards().to_vec();
            for i in 0..cards.len() {
                if game.session().deck().card(i).map_or(true, |c| c.matched) {
                    continue;
                }
                let partner = (i + 1..cards.len()).find(|&j| cards[j].symbol == cards[i].symbol);
                if let Some(j) = partner {
                    game.click(game.card_ref(i));
                    game.click(game.card_ref(j));
                }
            }
            black_box(game.phase())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), 12345).unwrap();
    let mut surface = BoardSurface::new();
    game.flush_to(&mut surface);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = view.render(&surface, Some(0), viewport);

    c.bench_function("render_board_80x24", |b| {
        b.iter(|| view.render_into(&surface, black_box(Some(5)), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_generate_board,
    bench_tick,
    bench_full_round,
    bench_render
);
criterion_main!(benches);
