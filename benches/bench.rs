use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cancel_concurrency::prelude::*;
use cancel_concurrency::signal::{self, Trigger};
use futures_lite::future::block_on;
use futures_lite::prelude::*;
use futures_lite::stream;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("fan_in 10", |b| b.iter(|| fan_in_test(black_box(10))));
    c.bench_function("fan_in 100", |b| b.iter(|| fan_in_test(black_box(100))));
    c.bench_function("fan_in 1000", |b| b.iter(|| fan_in_test(black_box(1000))));
    c.bench_function("or_done 1000", |b| b.iter(|| or_done_test(black_box(1000))));
    c.bench_function("or 10", |b| b.iter(|| or_test(black_box(10))));
    c.bench_function("or 100", |b| b.iter(|| or_test(black_box(100))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Merge `max` sources of ten items each.
fn fan_in_test(max: usize) {
    block_on(async {
        let (_trigger, cancel) = signal::signal();
        let streams: Vec<_> = (0..max).map(|_| stream::iter(0..10)).collect();
        let mut s = streams.fan_in(cancel);

        let mut counter = 0;
        while s.next().await.is_some() {
            counter += 1;
        }
        assert_eq!(counter, max * 10);
    })
}

fn or_done_test(max: usize) {
    block_on(async {
        let (_trigger, cancel) = signal::signal();
        let count = stream::iter(0..max).or_done(cancel).count().await;
        assert_eq!(count, max);
    })
}

/// Build an `or` over `max` signals and fire the deepest one.
fn or_test(max: usize) {
    let triggers: Vec<_> = (0..max).map(|_| Trigger::new()).collect();
    let signals: Vec<_> = triggers.iter().map(Trigger::signal).collect();
    if let Some(last) = triggers.last() {
        last.fire();
    }
    block_on(signals.or());
}
