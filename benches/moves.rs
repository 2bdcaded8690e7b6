//! Benchmarks for move enumeration, legality checks and full bot games.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use blokus::bots::{play_game, Strategy};
use blokus::game::Game;
use blokus::geometry::{all_orientations, Point};
use blokus::shapes::{ShapeCatalog, ShapeKind};

/// A fresh two-player game with opposite-corner start positions.
fn opening_game(size: usize) -> Game {
    let catalog = Arc::new(ShapeCatalog::standard().expect("standard catalog"));
    let last = size as i32 - 1;
    let starts: FxHashSet<Point> = [(0, 0), (last, last)].into_iter().collect();
    Game::new(2, size, starts, catalog).expect("valid configuration")
}

/// A game advanced a few deterministic moves so adjacency rules apply.
fn midgame_game(size: usize) -> Game {
    let mut game = opening_game(size);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..8 {
        let moves = game.available_moves();
        match Strategy::Largest.choose(&moves, &mut rng) {
            Some(piece) => {
                game.maybe_place(&piece).expect("enumerated move");
            }
            None => break,
        }
    }
    game
}

/// Benchmark enumerating every first move on an empty board.
fn bench_available_moves_opening(c: &mut Criterion) {
    let game = opening_game(11);
    c.bench_function("available_moves_opening", |b| {
        b.iter(|| black_box(&game).available_moves())
    });
}

/// Benchmark enumerating moves once the corner rule is in effect.
fn bench_available_moves_midgame(c: &mut Criterion) {
    let game = midgame_game(11);
    c.bench_function("available_moves_midgame", |b| {
        b.iter(|| black_box(&game).available_moves())
    });
}

/// Benchmark a single legality check for a known-legal piece.
fn bench_legal_to_place(c: &mut Criterion) {
    let game = midgame_game(11);
    let piece = game
        .available_moves()
        .into_iter()
        .next()
        .expect("midgame still has moves");

    c.bench_function("legal_to_place", |b| {
        b.iter(|| game.legal_to_place(black_box(&piece)))
    });
}

/// Benchmark computing all orientations of the F pentomino.
fn bench_orientations(c: &mut Criterion) {
    let catalog = ShapeCatalog::standard().expect("standard catalog");
    let offsets = catalog
        .shape(ShapeKind::F)
        .expect("F pentomino")
        .offsets()
        .to_vec();

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(&offsets)))
    });
}

/// Benchmark a complete smallest-vs-largest bot game.
fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot_game");
    group.sample_size(10);
    group.bench_function("smallest_vs_largest_11", |b| {
        b.iter(|| {
            let mut game = opening_game(11);
            let mut rng = StdRng::seed_from_u64(1);
            play_game(
                &mut game,
                &[Strategy::Smallest, Strategy::Largest],
                &mut rng,
            )
            .expect("engine-driven game")
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_available_moves_opening,
    bench_available_moves_midgame,
    bench_legal_to_place,
    bench_orientations,
    bench_full_game
);
criterion_main!(benches);
