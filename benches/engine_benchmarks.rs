//! Benchmarks for move generation, perft and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::search::{evaluate, material_and_position};
use mailbox_chess::zobrist::default_hasher;
use mailbox_chess::{Bot, Color, Game, SearchLimits};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("benchmark FEN")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Game::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let kiwipete = game(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [
        ("startpos", mailbox_chess::STARTING_FEN),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ] {
        let board = game(fen).board().clone();
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(board.legal_moves(Color::White)))
        });
        group.bench_function(BenchmarkId::new("pseudo_legal", name), |b| {
            b.iter(|| black_box(board.pseudo_legal_moves(Color::White)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let bot = Bot::new(SearchLimits::depth(depth));
            let start = Game::new();
            b.iter(|| bot.search(&start))
        });
    }

    let tactical = game("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    group.bench_function("mate_in_one", |b| {
        let bot = Bot::new(SearchLimits::depth(3));
        b.iter(|| bot.search(&tactical))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, fen) in [
        ("startpos", mailbox_chess::STARTING_FEN),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ] {
        let position = game(fen);
        group.bench_with_input(BenchmarkId::new("static", name), &position, |b, position| {
            b.iter(|| black_box(material_and_position(position.board())))
        });
        group.bench_with_input(BenchmarkId::new("evaluate", name), &position, |b, position| {
            b.iter(|| black_box(evaluate(position, Color::White, 0)))
        });
        group.bench_with_input(BenchmarkId::new("hash", name), &position, |b, position| {
            b.iter(|| black_box(default_hasher().hash(position)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
