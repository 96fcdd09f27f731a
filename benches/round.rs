//! Deck generation and full-round benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memory_match::{
    DeckGenerator, GameRng, MemoryStore, PairValue, RoundConfig, RoundController,
    DECK_SIZE_OPTIONS,
};
use rustc_hash::FxHashMap;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in DECK_SIZE_OPTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut generator = DeckGenerator::default();
            let mut rng = GameRng::new(42);
            b.iter(|| generator.generate(black_box(size), &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_solve_round(c: &mut Criterion) {
    c.bench_function("solve_32_card_round", |b| {
        let config = RoundConfig::new().with_seed(42);
        let mut controller = RoundController::new(config, MemoryStore::new()).unwrap();
        b.iter(|| {
            controller.start_round(32).unwrap();
            let mut first_seen = FxHashMap::<PairValue, _>::default();
            for card in controller.snapshot().cards {
                match first_seen.remove(&card.value) {
                    Some(first) => {
                        controller.select_card(first).unwrap();
                        controller.select_card(card.id).unwrap();
                    }
                    None => {
                        first_seen.insert(card.value, card.id);
                    }
                }
            }
            black_box(controller.state().moves)
        });
    });
}

criterion_group!(benches, bench_generate, bench_solve_round);
criterion_main!(benches);
