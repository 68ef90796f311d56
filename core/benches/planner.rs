use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pairs_core::*;

fn bench_find_plan(c: &mut Criterion) {
    let fresh = Game::new(GameConfig::default(), 0xC0FFEE).unwrap();

    let mut half = Game::with_layout(GameConfig::default(), CardLayout::ordered()).unwrap();
    for pair in 0..(PAIR_COUNT / 2) as CardId {
        half.flip_card(pair * 2).unwrap();
        half.flip_card(pair * 2 + 1).unwrap();
        half.advance(half.config().match_check_delay_ms);
    }

    let mut group = c.benchmark_group("find_plan");
    group.bench_function("fresh_board", |b| {
        b.iter(|| find_plan(black_box(fresh.cards()), black_box(&BTreeSet::new())))
    });
    group.bench_function("half_cleared", |b| {
        b.iter(|| find_plan(black_box(half.cards()), black_box(half.matched_values())))
    });
    group.finish();
}

criterion_group!(benches, bench_find_plan);
criterion_main!(benches);
