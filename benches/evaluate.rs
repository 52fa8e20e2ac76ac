use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tic_tac_mc::board::Board;
use tic_tac_mc::core::Player;
use tic_tac_mc::mc::{EvaluatorConfig, MonteCarloEvaluator};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for dimension in [3, 5, 7] {
        let board = Board::new(dimension, false).unwrap();
        let mut evaluator = MonteCarloEvaluator::new(EvaluatorConfig::default());

        group.bench_with_input(BenchmarkId::new("empty_board", dimension), &board, |b, board| {
            b.iter(|| evaluator.evaluate(black_box(board), Player::X, 100).unwrap())
        });
    }

    group.finish();
}

fn bench_find_winner(c: &mut Criterion) {
    let board = Board::parse(&["XOX", "OXO", "OX_"], false).unwrap();
    c.bench_function("find_winner_3x3", |b| b.iter(|| black_box(&board).find_winner()));
}

criterion_group!(benches, bench_evaluate, bench_find_winner);
criterion_main!(benches);
