#[macro_use]
extern crate criterion;

use criterion::Criterion;
use holdem_outs::holdem::{OutsConfig, Spot};

fn effective_outs_flop(c: &mut Criterion) {
    let spot = Spot::parse("9s8s", "7s6d2c", None).unwrap();
    let config = OutsConfig::default();
    c.bench_function("Effective outs on the flop", move |b| {
        b.iter(|| spot.effective_outs(&config))
    });
}

fn classify_with_villain(c: &mut Criterion) {
    let spot = Spot::parse("9s8s", "7h6h2c", Some("AhKh")).unwrap();
    let config = OutsConfig::default();
    c.bench_function("Classify outs against a villain", move |b| {
        b.iter(|| spot.classify(&config))
    });
}

fn classify_turn(c: &mut Criterion) {
    let spot = Spot::parse("AhKh", "2h7h9cJs", None).unwrap();
    let config = OutsConfig::default();
    c.bench_function("Classify outs on the turn", move |b| {
        b.iter(|| spot.classify(&config))
    });
}

criterion_group!(benches, effective_outs_flop, classify_with_villain, classify_turn);
criterion_main!(benches);
