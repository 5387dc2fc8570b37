use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hand_rank::classifier::classify;
use hand_rank::hand::{parse_hand, Hand};

fn hand(tokens: [&str; 5]) -> Hand {
    parse_hand(&tokens).expect("valid bench hand")
}

fn bench_classify(c: &mut Criterion) {
    let hi = hand(["A♥", "K♦", "7♠", "5♣", "2♦"]);
    let wheel = hand(["A♠", "2♥", "3♦", "4♣", "5♠"]);
    let sf = hand(["10♠", "J♠", "Q♠", "K♠", "A♠"]);

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("wheel", "A,2,3,4,5"), &wheel, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();
}

fn bench_parse_hand(c: &mut Criterion) {
    let tokens = ["10♥", "A♠", "3♦", "K♣", "7♥"];
    c.bench_function("parse_hand", |b| b.iter(|| parse_hand(black_box(&tokens))));
}

criterion_group!(benches, bench_classify, bench_parse_hand);
criterion_main!(benches);
