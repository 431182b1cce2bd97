use checkers::{find_captures, generate_moves, generate_moves_batch, Board, Color, Square};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    [
        "rrrrrrrrrrrr________bbbbbbbbbbbb",
        "rrrrrrrr_rrr_r______bbbbbbbbbbbb",
        "_____r___b______________________",
        "____r_rr_r_r_r_b__b_b_bbb_b___b_",
        "_________R_r_r___r_r__b___B_____",
        "__R______b_b____b_b______b_b____",
    ]
    .iter()
    .filter_map(|s| s.parse().ok())
    .collect()
}

fn bench_generate(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("movegen/generate_moves", |bch| {
        bch.iter(|| {
            let mut total = 0usize;
            for bd in &boards {
                total += generate_moves(black_box(bd), Color::Black).len();
                total += generate_moves(black_box(bd), Color::Red).len();
            }
            black_box(total)
        })
    });
}

fn bench_capture_chain(c: &mut Criterion) {
    // Red king at 2 with a ladder of black men to jump through
    let board: Board = "__R______b_b____b_b______b_b____".parse().unwrap_or_default();
    c.bench_function("movegen/find_captures", |bch| {
        bch.iter(|| black_box(find_captures(black_box(&board), Square::new(2))).len())
    });
}

fn bench_batch(c: &mut Criterion) {
    let boards: Vec<Board> = corpus().into_iter().cycle().take(256).collect();
    c.bench_function("movegen/batch_256", |bch| {
        bch.iter(|| black_box(generate_moves_batch(black_box(&boards), Color::Black)).len())
    });
}

criterion_group!(movegen, bench_generate, bench_capture_chain, bench_batch);
criterion_main!(movegen);
