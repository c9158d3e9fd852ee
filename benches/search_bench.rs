use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tictac::search::minimax::Searcher;
use tictac::{Board, Player};

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_empty_board", |ben| {
        ben.iter(|| {
            let mut b = Board::new();
            let mut s = Searcher::default();
            let r = s.search(black_box(&mut b), Player::Ai);
            black_box(r.nodes)
        })
    });
    let mid: Board = "X__/_O_/___".parse().expect("valid board");
    c.bench_function("search_two_marks", |ben| {
        ben.iter(|| {
            let mut b = mid;
            let mut s = Searcher::default();
            black_box(s.search(black_box(&mut b), Player::Ai))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
