//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full MCTS search with varying iteration counts
//! - Search from different game states (opening, midgame, near-terminal)
//! - Tree operations (expansion, selection, backpropagation)
//! - Exploration constant sensitivity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use engine_core::Piece;
use games_connect4::State;
use mcts::{run_mcts, MctsConfig, MctsTree, EXPLORATION};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn position(moves: &[u8]) -> State {
    State::from_moves(moves).unwrap()
}

// =============================================================================
// Full MCTS Search Benchmarks
// =============================================================================

fn bench_mcts_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search_iterations");
    group.sample_size(20);

    for iterations in [100u32, 400, 1000, 4000] {
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            BenchmarkId::new("opening", iterations),
            &iterations,
            |b, &iterations| {
                let config = MctsConfig::default().with_iterations(iterations);

                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    black_box(run_mcts(State::new(), config.clone(), &mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_mcts_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_game_phases");
    let config = MctsConfig::for_testing();

    // Opening position (all 7 columns available)
    group.bench_function("opening", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            black_box(run_mcts(State::new(), config.clone(), &mut rng).unwrap())
        });
    });

    // Midgame position, center columns half full
    let midgame = position(&[3, 3, 2, 4, 3, 2, 4, 4, 2, 3]);
    group.bench_function("midgame", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            black_box(run_mcts(midgame.clone(), config.clone(), &mut rng).unwrap())
        });
    });

    // Near-terminal position: Red can complete the bottom row at column 3
    let near_terminal = position(&[0, 6, 1, 6, 2, 5]);
    group.bench_function("near_terminal", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(42);
            black_box(run_mcts(near_terminal.clone(), config.clone(), &mut rng).unwrap())
        });
    });

    group.finish();
}

// =============================================================================
// Tree Operation Benchmarks
// =============================================================================

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_tree_ops");

    group.bench_function("expand_root", |b| {
        b.iter(|| {
            let mut tree = MctsTree::new(State::new());
            black_box(tree.expand(tree.root()))
        });
    });

    group.bench_function("select_child", |b| {
        let mut tree = MctsTree::new(State::new());
        tree.expand(tree.root());
        let children = tree.get(tree.root()).children.clone();
        for (i, &id) in children.iter().enumerate() {
            for _ in 0..=i {
                tree.backpropagate(id, Some(Piece::Red));
            }
        }

        b.iter(|| black_box(tree.select_child(tree.root(), EXPLORATION)));
    });

    group.bench_function("backpropagate_depth_6", |b| {
        let mut tree = MctsTree::new(State::new());
        let mut leaf = tree.root();
        for _ in 0..6 {
            tree.expand(leaf);
            leaf = tree.get(leaf).children[3];
        }

        b.iter(|| {
            tree.backpropagate(black_box(leaf), Some(Piece::Yellow));
        });
    });

    group.finish();
}

// =============================================================================
// Configuration Benchmarks
// =============================================================================

fn bench_exploration_constants(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_exploration");

    for exploration in [0.5f64, 1.0, 1.41, 2.0] {
        group.bench_with_input(
            BenchmarkId::new("c", exploration),
            &exploration,
            |b, &exploration| {
                let config = MctsConfig::for_testing().with_exploration(exploration);

                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    black_box(run_mcts(State::new(), config.clone(), &mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mcts_search_iterations,
    bench_mcts_game_phases,
    bench_tree_operations,
    bench_exploration_constants,
);

criterion_main!(benches);
