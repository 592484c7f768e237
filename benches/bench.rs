use criterion::{Criterion, criterion_group, criterion_main};
use kropki_solver::kropki::board::Board;
use kropki_solver::kropki::marker::Marker;
use kropki_solver::kropki::selection::FirstEmpty;
use kropki_solver::kropki::solver::{Backtracking, SolverOptions};
use std::hint::black_box;

const PUZZLE: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

fn classic_board() -> Board {
    Board::from_cells(PUZZLE)
}

fn kropki_board() -> Board {
    let mut vertical = [[Marker::None; 8]; 9];
    let mut horizontal = [[Marker::None; 9]; 8];
    vertical[0][3] = Marker::White;
    vertical[0][4] = Marker::White;
    vertical[0][5] = Marker::White;
    vertical[4][0] = Marker::Black;
    horizontal[0][2] = Marker::Black;
    horizontal[7][3] = Marker::Black;
    Board::new(PUZZLE, vertical, horizontal)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    group.bench_function("mrv_degree_forward_check", |b| {
        b.iter(|| {
            Backtracking::new(black_box(classic_board()))
                .solve()
                .unwrap()
        });
    });

    group.bench_function("mrv_degree_no_forward_check", |b| {
        let options = SolverOptions {
            forward_check: false,
            ..SolverOptions::default()
        };
        b.iter(|| {
            Backtracking::with_options(black_box(classic_board()), options)
                .solve()
                .unwrap()
        });
    });

    group.bench_function("first_empty_no_forward_check", |b| {
        let options = SolverOptions {
            forward_check: false,
            ..SolverOptions::default()
        };
        b.iter(|| {
            Backtracking::with_selector(black_box(classic_board()), FirstEmpty, options)
                .solve()
                .unwrap()
        });
    });

    group.bench_function("kropki_dots", |b| {
        b.iter(|| Backtracking::new(black_box(kropki_board())).solve().unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
